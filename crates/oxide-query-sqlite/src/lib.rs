//! # oxide-query-sqlite
//!
//! Runs statements built with `oxide-query-core` against a SQLite database.
//!
//! The [`Executor`] compiles each statement with the SQLite dialect, binds
//! the parameters in order and hands the query to a `sqlx` pool. The core
//! crate never performs I/O; this crate is the only place that does.

mod error;
mod executor;

pub use error::{ExecError, Result};
pub use executor::Executor;
