//! DELETE statement builder.

use crate::compiler::{Compile, Compiler};
use crate::error::Result;
use crate::statement::{SqlStatement, TableRef};

use super::conditions::{Filterable, StatementHandle};
use super::join::Joinable;

/// A DELETE statement builder.
///
/// FROM tables and the tables rows are deleted from are kept apart, so a
/// multi-table delete can read from a join but only delete from some of its
/// tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteStatement {
    statement: SqlStatement,
}

impl DeleteStatement {
    /// Creates a new DELETE builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing clause store.
    #[must_use]
    pub const fn from_statement(statement: SqlStatement) -> Self {
        Self { statement }
    }

    /// Returns the clause store.
    #[must_use]
    pub const fn statement(&self) -> &SqlStatement {
        &self.statement
    }

    /// Adds a FROM table.
    pub fn from(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.statement.add_tables([table.into()]);
        self
    }

    /// Sets the tables to delete rows from (`DELETE t1, t2 FROM ...`).
    pub fn targets(&mut self, tables: &[&str]) -> &mut Self {
        self.statement
            .set_delete_targets(tables.iter().map(|t| (*t).to_string()).collect());
        self
    }
}

impl StatementHandle for DeleteStatement {
    fn statement_mut(&mut self) -> &mut SqlStatement {
        &mut self.statement
    }
}

impl Filterable for DeleteStatement {}
impl Joinable for DeleteStatement {}

impl Compile for DeleteStatement {
    const KIND: &'static str = "DELETE";

    fn compile_with(&self, compiler: &mut Compiler<'_>) -> Result<String> {
        compiler.delete(&self.statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{GenericDialect, MySqlDialect};
    use crate::error::CompileError;
    use crate::statement::Operator;
    use crate::value::SqlValue;

    #[test]
    fn test_simple_delete() {
        let mut delete = DeleteStatement::new();
        delete.from("users").where_("id").is(1);

        let (sql, params) = delete.to_sql(&GenericDialect::new()).unwrap();
        assert_eq!(sql, "DELETE FROM \"users\" WHERE \"id\" = ?");
        assert_eq!(params, vec![SqlValue::Int(1)]);
    }

    #[test]
    fn test_delete_without_where() {
        let mut delete = DeleteStatement::new();
        delete.from("sessions");
        let (sql, _) = delete.to_sql(&GenericDialect::new()).unwrap();
        assert_eq!(sql, "DELETE FROM \"sessions\"");
    }

    #[test]
    fn test_multi_table_delete() {
        let mut delete = DeleteStatement::new();
        delete
            .targets(&["orders"])
            .from("orders")
            .inner_join("users", "orders.user_id", Operator::Eq, "users.id")
            .where_("users.banned")
            .is(true);

        let (sql, params) = delete.to_sql(&MySqlDialect::new()).unwrap();
        assert_eq!(
            sql,
            "DELETE `orders` FROM `orders` INNER JOIN `users` ON `orders`.`user_id` = `users`.`id` \
             WHERE `users`.`banned` = ?"
        );
        assert_eq!(params, vec![SqlValue::Bool(true)]);
    }

    #[test]
    fn test_delete_requires_table() {
        let delete = DeleteStatement::new();
        assert_eq!(
            delete.to_sql(&GenericDialect::new()).unwrap_err(),
            CompileError::MissingTable { statement: "DELETE" }
        );
    }
}
