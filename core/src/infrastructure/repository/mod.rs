pub mod compiler;
pub mod executor;

pub use executor::{QueryExecutor, SqlRepository};
