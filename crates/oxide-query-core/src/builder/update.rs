//! UPDATE statement builder.

use crate::compiler::{Compile, Compiler};
use crate::error::Result;
use crate::expression::Expression;
use crate::statement::{SqlStatement, TableRef};
use crate::value::{IntoOperand, Operand, ToSqlValue};

use super::conditions::{Filterable, StatementHandle};

/// An UPDATE statement builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateStatement {
    statement: SqlStatement,
}

impl UpdateStatement {
    /// Creates a new UPDATE builder.
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

    /// Adds a table to update.
    pub fn table(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.statement.add_tables([table.into()]);
        self
    }

    /// Adds `column = value`; pass [`col`](crate::col) to copy another column.
    pub fn set(&mut self, column: &str, value: impl IntoOperand) -> &mut Self {
        self.statement
            .add_assignment(column.to_string(), value.into_operand());
        self
    }

    /// Adds `column = <expression>`.
    pub fn set_expr(&mut self, column: &str, f: impl FnOnce(&mut Expression)) -> &mut Self {
        let expr = SqlStatement::closure_to_expression(f);
        self.statement
            .add_assignment(column.to_string(), Operand::Expression(expr));
        self
    }

    /// Adds one assignment per `(column, value)` pair, in order.
    pub fn set_many<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoOperand,
    {
        for (column, value) in values {
            self.statement
                .add_assignment(column.into(), value.into_operand());
        }
        self
    }

    fn step(&mut self, column: &str, op: &str, by: impl ToSqlValue) -> &mut Self {
        self.set_expr(column, |e| {
            e.column(column).op(op).value(by);
        })
    }

    /// `column = column + by`
    pub fn increment(&mut self, column: &str, by: impl ToSqlValue) -> &mut Self {
        self.step(column, "+", by)
    }

    /// `column = column - by`
    pub fn decrement(&mut self, column: &str, by: impl ToSqlValue) -> &mut Self {
        self.step(column, "-", by)
    }
}

impl StatementHandle for UpdateStatement {
    fn statement_mut(&mut self) -> &mut SqlStatement {
        &mut self.statement
    }
}

impl Filterable for UpdateStatement {}

impl Compile for UpdateStatement {
    const KIND: &'static str = "UPDATE";

    fn compile_with(&self, compiler: &mut Compiler<'_>) -> Result<String> {
        compiler.update(&self.statement)
    }
}
