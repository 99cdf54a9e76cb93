pub mod block;
pub mod common;
pub mod loader;
pub mod query;
