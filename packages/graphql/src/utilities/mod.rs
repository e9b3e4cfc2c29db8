pub mod directory;
pub mod sessions;

pub use directory::SharedDirectory;
pub use sessions::{FormSession, FormSessions};
