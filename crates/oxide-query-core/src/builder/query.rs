//! Query entry points.
//!
//! [`Query`] offers factories for the four statement kinds plus a
//! table-scoped seed: conditions added to a seed are shared by every
//! statement forked from it, and each fork owns a deep copy.
//!
//! ```rust
//! use oxide_query_core::{Compile, Filterable, GenericDialect, Query};
//!
//! let mut active = Query::table("users");
//! active.where_("deleted_at").is_null();
//!
//! let mut select = active.to_select();
//! select.columns(&["id"]);
//! let mut delete = active.to_delete();
//! delete.and_where("last_login").less_than("2020-01-01");
//!
//! let dialect = GenericDialect::new();
//! assert_eq!(
//!     select.to_sql(&dialect).unwrap().0,
//!     "SELECT \"id\" FROM \"users\" WHERE \"deleted_at\" IS NULL"
//! );
//! assert_eq!(
//!     delete.to_sql(&dialect).unwrap().0,
//!     "DELETE FROM \"users\" WHERE \"deleted_at\" IS NULL AND \"last_login\" < ?"
//! );
//! ```

use crate::statement::{SqlStatement, TableRef};

use super::conditions::{Filterable, StatementHandle};
use super::delete::DeleteStatement;
use super::insert::InsertStatement;
use super::select::SelectStatement;
use super::update::UpdateStatement;

/// A table plus a WHERE prefix, ready to fork into concrete statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    statement: SqlStatement,
}

impl Query {
    /// Starts a SELECT.
    #[must_use]
    pub fn select() -> SelectStatement {
        SelectStatement::new()
    }

    /// Starts an INSERT.
    #[must_use]
    pub fn insert() -> InsertStatement {
        InsertStatement::new()
    }

    /// Starts an UPDATE of `table`.
    #[must_use]
    pub fn update(table: impl Into<TableRef>) -> UpdateStatement {
        let mut update = UpdateStatement::new();
        update.table(table);
        update
    }

    /// Starts a DELETE.
    #[must_use]
    pub fn delete() -> DeleteStatement {
        DeleteStatement::new()
    }

    /// Creates a seed scoped to `table`.
    #[must_use]
    pub fn table(table: impl Into<TableRef>) -> Self {
        let mut statement = SqlStatement::new();
        statement.add_tables([table.into()]);
        Self { statement }
    }

    /// Returns the clause store.
    #[must_use]
    pub const fn statement(&self) -> &SqlStatement {
        &self.statement
    }

    /// Forks a SELECT over the seed's table and conditions.
    #[must_use]
    pub fn to_select(&self) -> SelectStatement {
        SelectStatement::from_statement(self.statement.clone())
    }

    /// Forks an UPDATE over the seed's table and conditions.
    #[must_use]
    pub fn to_update(&self) -> UpdateStatement {
        UpdateStatement::from_statement(self.statement.clone())
    }

    /// Forks a DELETE over the seed's table and conditions.
    #[must_use]
    pub fn to_delete(&self) -> DeleteStatement {
        DeleteStatement::from_statement(self.statement.clone())
    }
}

impl StatementHandle for Query {
    fn statement_mut(&mut self) -> &mut SqlStatement {
        &mut self.statement
    }
}

impl Filterable for Query {}
