//! Error types for building and compiling statements.

use thiserror::Error;

/// Misuse of the builder API, reported at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// `IN`/`NOT IN` was given no candidates.
    #[error("empty value list passed to IN in a {clause} clause")]
    EmptyInList {
        /// The clause list the condition was meant for.
        clause: &'static str,
    },

    /// An explicit INSERT column list was empty.
    #[error("INSERT column list is empty")]
    EmptyColumns,

    /// An explicit INSERT column list named the same column twice.
    #[error("INSERT column list names {column} more than once")]
    DuplicateColumn {
        /// The repeated column.
        column: String,
    },

    /// The INSERT column order was set after rows were already added.
    #[error("INSERT column order is already locked by existing rows")]
    ColumnsLocked,
}

/// Errors raised while compiling a statement to SQL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The active dialect has no rendering for a construct.
    #[error("{feature} is not supported by the {dialect} dialect")]
    Unsupported {
        /// Dialect name.
        dialect: &'static str,
        /// The missing capability.
        feature: String,
    },

    /// The statement has no table to act on.
    #[error("{statement} statement has no target table")]
    MissingTable {
        /// Statement kind.
        statement: &'static str,
    },

    /// An INSERT with neither VALUES rows nor a source query.
    #[error("INSERT statement has no rows and no source query")]
    EmptyInsert,

    /// An UPDATE without any SET assignment.
    #[error("UPDATE statement has no SET assignments")]
    EmptyUpdate,

    /// A date/time value could not be rendered with the date format.
    #[error("invalid date format: {format}")]
    InvalidDateFormat {
        /// The rejected `chrono` format string.
        format: String,
    },
}

impl CompileError {
    /// Creates an [`CompileError::Unsupported`] error.
    #[must_use]
    pub fn unsupported(dialect: &'static str, feature: impl Into<String>) -> Self {
        Self::Unsupported {
            dialect,
            feature: feature.into(),
        }
    }
}

/// Result type for compile operations.
pub type Result<T> = std::result::Result<T, CompileError>;
