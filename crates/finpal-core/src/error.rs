//! Core error taxonomy
//!
//! Every service operation fails fast with one of these variants; the two
//! zero-income fallbacks (zero-whole percentage, recommendation sentinel) are
//! business rules and never surface as errors.

use thiserror::Error;
use uuid::Uuid;

/// Errors produced by the core services and the storage trait.
#[derive(Debug, Error)]
pub enum Error {
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
