pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{Autoconfigure, LoaderStatus, SyncStatus};
pub use ports::LoaderService;
pub use services::Loader;
