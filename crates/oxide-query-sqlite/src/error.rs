//! Error types for statement execution.

use oxide_query_core::CompileError;
use thiserror::Error;

/// Errors raised while running a statement.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The statement could not be compiled for SQLite.
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type alias for execution.
pub type Result<T> = std::result::Result<T, ExecError>;
