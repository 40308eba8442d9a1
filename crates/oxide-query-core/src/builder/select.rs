//! SELECT statement builder.

use crate::compiler::{Compile, Compiler};
use crate::error::Result;
use crate::expression::{Expression, Function};
use crate::statement::{NullOrdering, OrderBy, OrderDirection, SqlStatement, TableRef};

use super::conditions::{Filterable, HavingFilterable, StatementHandle};
use super::join::Joinable;

/// A SELECT statement builder.
///
/// WHERE, HAVING and JOIN methods come from the [`Filterable`],
/// [`HavingFilterable`] and [`Joinable`] traits.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectStatement {
    statement: SqlStatement,
}

impl SelectStatement {
    /// Creates a new SELECT builder.
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

    /// Consumes the builder and returns the clause store.
    #[must_use]
    pub fn into_statement(self) -> SqlStatement {
        self.statement
    }

    /// Adds a table to FROM.
    pub fn from(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.statement.add_tables([table.into()]);
        self
    }

    /// Adds several tables to FROM.
    pub fn from_tables(&mut self, tables: &[&str]) -> &mut Self {
        self.statement
            .add_tables(tables.iter().map(|t| TableRef::table(*t)));
        self
    }

    /// Adds an aliased table to FROM.
    pub fn from_as(&mut self, table: &str, alias: &str) -> &mut Self {
        self.statement.add_tables([TableRef::aliased(table, alias)]);
        self
    }

    /// Replaces the SELECT list with plain columns.
    pub fn columns(&mut self, columns: &[&str]) -> &mut Self {
        self.statement.columns.clear();
        for column in columns {
            self.statement
                .add_column(Expression::from_column(*column), None);
        }
        self
    }

    /// Appends a column to the SELECT list.
    pub fn column(&mut self, column: &str) -> &mut Self {
        self.statement
            .add_column(Expression::from_column(column), None);
        self
    }

    /// Appends an aliased column to the SELECT list.
    pub fn column_as(&mut self, column: &str, alias: &str) -> &mut Self {
        self.statement
            .add_column(Expression::from_column(column), Some(alias.to_string()));
        self
    }

    /// Appends a composed expression to the SELECT list.
    pub fn column_expr(
        &mut self,
        f: impl FnOnce(&mut Expression),
        alias: Option<&str>,
    ) -> &mut Self {
        let expr = SqlStatement::closure_to_expression(f);
        self.statement.add_column(expr, alias.map(str::to_string));
        self
    }

    /// Sets SELECT DISTINCT.
    pub fn distinct(&mut self) -> &mut Self {
        self.statement.set_distinct(true);
        self
    }

    fn aggregate(&mut self, function: Function, column: &str) -> &mut Self {
        self.statement.columns.clear();
        let mut expr = Expression::new();
        expr.function(function, vec![Expression::from_column(column)]);
        self.statement.add_column(expr, None);
        self
    }

    /// Replaces the SELECT list with `COUNT(column)`.
    pub fn count(&mut self, column: &str) -> &mut Self {
        self.aggregate(Function::Count, column)
    }

    /// Replaces the SELECT list with `AVG(column)`.
    pub fn avg(&mut self, column: &str) -> &mut Self {
        self.aggregate(Function::Avg, column)
    }

    /// Replaces the SELECT list with `SUM(column)`.
    pub fn sum(&mut self, column: &str) -> &mut Self {
        self.aggregate(Function::Sum, column)
    }

    /// Replaces the SELECT list with `MIN(column)`.
    pub fn min(&mut self, column: &str) -> &mut Self {
        self.aggregate(Function::Min, column)
    }

    /// Replaces the SELECT list with `MAX(column)`.
    pub fn max(&mut self, column: &str) -> &mut Self {
        self.aggregate(Function::Max, column)
    }

    /// Adds GROUP BY columns.
    pub fn group_by(&mut self, columns: &[&str]) -> &mut Self {
        for column in columns {
            self.statement.add_group_by(Expression::from_column(*column));
        }
        self
    }

    /// Adds a GROUP BY expression.
    pub fn group_by_expr(&mut self, f: impl FnOnce(&mut Expression)) -> &mut Self {
        self.statement
            .add_group_by(SqlStatement::closure_to_expression(f));
        self
    }

    /// Adds an ORDER BY entry; `direction` and `nulls` apply to every column.
    pub fn order_by(
        &mut self,
        columns: &[&str],
        direction: OrderDirection,
        nulls: Option<NullOrdering>,
    ) -> &mut Self {
        self.statement.add_order(OrderBy {
            columns: columns.iter().map(|c| Expression::from_column(*c)).collect(),
            direction,
            nulls,
        });
        self
    }

    /// Adds an ORDER BY entry on a composed expression.
    pub fn order_by_expr(
        &mut self,
        f: impl FnOnce(&mut Expression),
        direction: OrderDirection,
        nulls: Option<NullOrdering>,
    ) -> &mut Self {
        self.statement.add_order(OrderBy {
            columns: vec![SqlStatement::closure_to_expression(f)],
            direction,
            nulls,
        });
        self
    }

    /// Sets LIMIT.
    pub fn limit(&mut self, n: u64) -> &mut Self {
        self.statement.set_limit(Some(n));
        self
    }

    /// Sets OFFSET.
    pub fn offset(&mut self, n: u64) -> &mut Self {
        self.statement.set_offset(Some(n));
        self
    }

    /// Sets LIMIT and OFFSET from a 1-based page number.
    pub fn page(&mut self, page: u64, per_page: u64) -> &mut Self {
        self.statement.set_limit(Some(per_page));
        self.statement
            .set_offset(Some(page.saturating_sub(1).saturating_mul(per_page)));
        self
    }

    /// Selects INTO a new table (`SELECT ... INTO table FROM ...`).
    pub fn into_table(&mut self, table: &str) -> &mut Self {
        self.statement.set_into(table, None);
        self
    }
}

impl StatementHandle for SelectStatement {
    fn statement_mut(&mut self) -> &mut SqlStatement {
        &mut self.statement
    }
}

impl Filterable for SelectStatement {}
impl HavingFilterable for SelectStatement {}
impl Joinable for SelectStatement {}

impl Compile for SelectStatement {
    const KIND: &'static str = "SELECT";

    fn compile_with(&self, compiler: &mut Compiler<'_>) -> Result<String> {
        compiler.select(&self.statement)
    }
}
