use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown filter field: {0}")]
    UnknownFilterField(String),

    #[error("Malformed range for field {0}: expected at least one of `from` or `to`")]
    MalformedRange(String),

    #[error("Invalid value for field {field}: {reason}")]
    InvalidFilterValue { field: String, reason: String },

    #[error("Invalid order: {0}")]
    InvalidOrderBy(String),

    #[error("Database error: {0}")]
    Connection(#[source] DbErr),
}

impl CoreError {
    /// Errors caused by the caller's parameters rather than by the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CoreError::Connection(_))
    }
}
