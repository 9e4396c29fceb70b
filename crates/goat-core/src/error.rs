//! Centralized error types for GOAT Todo.

use thiserror::Error;

/// Main error type for todo operations.
#[derive(Error, Debug)]
pub enum GoatError {
    #[error("todo not found: {0}")]
    TodoNotFound(i64),

    #[error("invalid id")]
    InvalidId,

    #[error("{0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    Database(#[from] goat_db::DbError),
}

/// Result type for todo operations.
pub type GoatResult<T> = Result<T, GoatError>;

impl GoatError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
