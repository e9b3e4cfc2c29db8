use services::Directory;
use std::sync::Mutex;

/// The dashboard directory shared by all requests.
pub struct SharedDirectory(Mutex<Directory>);

impl SharedDirectory {
    pub fn new(directory: Directory) -> Self {
        SharedDirectory(Mutex::new(directory))
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut Directory) -> T) -> async_graphql::Result<T> {
        let mut directory = self
            .0
            .lock()
            .map_err(|_| async_graphql::Error::new("Directory is unavailable"))?;
        Ok(f(&mut directory))
    }
}

impl Default for SharedDirectory {
    fn default() -> Self {
        Self::new(Directory::new())
    }
}
