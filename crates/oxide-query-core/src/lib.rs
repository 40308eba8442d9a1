//! # oxide-query-core
//!
//! A composable SQL statement builder with a multi-dialect compiler.
//!
//! This crate provides:
//! - Fluent builders for SELECT, INSERT, UPDATE and DELETE statements
//! - Nested WHERE/HAVING groups, EXISTS and IN sub-selects, joins
//! - A compiler that renders a statement for a [`Dialect`] and returns the
//!   SQL text together with its ordered parameters
//!
//! Values are never inlined into the SQL text: each one becomes a
//! placeholder plus one entry in the parameter list, in the same order.
//!
//! ```rust
//! use oxide_query_core::prelude::*;
//!
//! let mut select = Query::select();
//! select
//!     .columns(&["id", "name"])
//!     .from("users")
//!     .where_("name")
//!     .is("'; DROP TABLE users; --")
//!     .or_where_group(|g| {
//!         g.where_("age").between(18, 30).and_where("banned").is(false);
//!     })
//!     .limit(10);
//!
//! let (sql, params) = select.to_sql(&SqliteDialect::new()).unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT \"id\", \"name\" FROM \"users\" WHERE \"name\" = ? \
//!      OR (\"age\" BETWEEN ? AND ? AND \"banned\" = ?) LIMIT 10"
//! );
//! assert_eq!(params.len(), 4);
//! ```
//!
//! Statements are plain data: cloning one is a deep copy, and a statement
//! can be mutated and compiled again any number of times.

pub mod builder;
pub mod compiler;
pub mod dialect;
pub mod error;
pub mod expression;
pub mod statement;
pub mod value;

pub use builder::{
    DeleteStatement, Filterable, Having, HavingFilterable, HavingGroup, InsertStatement, JoinOn,
    Joinable, Query, SelectStatement, StatementHandle, UpdateStatement, Where, WhereGroup,
};
pub use compiler::{Compile, Compiler};
pub use dialect::{Dialect, GenericDialect, MySqlDialect, PostgresDialect, SqliteDialect};
pub use error::{BuildError, CompileError, Result};
pub use expression::{Expression, Function, Node};
pub use statement::{
    Clause, Condition, JoinType, NullOrdering, Operator, OrderDirection, Separator, SqlStatement,
    TableRef,
};
pub use value::{col, IntoOperand, Operand, SqlValue, ToSqlValue};

/// The builder traits and the most used types, for glob import.
pub mod prelude {
    pub use crate::builder::{Filterable, HavingFilterable, Joinable, Query};
    pub use crate::compiler::Compile;
    pub use crate::dialect::{GenericDialect, MySqlDialect, PostgresDialect, SqliteDialect};
    pub use crate::statement::{JoinType, NullOrdering, Operator, OrderDirection};
    pub use crate::value::col;
}
