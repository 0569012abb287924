//! Database error types

use thiserror::Error;

/// Database operation errors
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::Serialization(e.to_string())
    }
}

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;

impl From<DbError> for finpal_core::Error {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound(msg) => finpal_core::Error::NotFound(msg),
            DbError::Duplicate(msg) | DbError::InvalidInput(msg) => {
                finpal_core::Error::Validation(msg)
            }
            other => finpal_core::Error::Storage(other.to_string()),
        }
    }
}
