pub mod get_autoconfigure;
pub mod get_status;
pub mod get_sync_status;
