pub mod clock;
pub mod config;
pub mod dashboard;
pub mod forms;
pub mod gateway;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, LogFormat, PortalConfig};
pub use dashboard::{Directory, DirectoryError, PatientDashboard};
pub use forms::*;
pub use gateway::{GatewayError, PortalGateway, SimulatedGateway, Submission, SubmitOutcome};
pub use models::directory::RowAction;
pub use validation::*;
