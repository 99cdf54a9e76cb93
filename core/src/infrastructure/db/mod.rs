pub mod connection;

pub use connection::SqlDatabase;
