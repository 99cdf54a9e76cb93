pub mod block;
pub mod delegate;
pub mod loader;
pub mod query_extractor;
pub mod query_params;
pub mod server;
