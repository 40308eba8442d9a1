//! JOIN clauses.

use crate::expression::Expression;
use crate::statement::{Clause, Condition, Join, JoinType, Operator, Separator, TableRef};
use crate::value::{IntoOperand, Operand};

use super::conditions::StatementHandle;

/// Builders that accept JOIN clauses.
pub trait Joinable: StatementHandle + Sized {
    /// Adds a join of `kind` on `table`, with ON conditions built by `f`.
    fn join(
        &mut self,
        kind: JoinType,
        table: impl Into<TableRef>,
        f: impl FnOnce(&mut JoinOn),
    ) -> &mut Self {
        let mut on = JoinOn::default();
        f(&mut on);
        self.statement_mut().add_join_clause(Join {
            kind,
            table: table.into(),
            conditions: on.conditions,
        });
        self
    }

    /// `INNER JOIN table ON left <op> right`, comparing two columns.
    fn inner_join(
        &mut self,
        table: impl Into<TableRef>,
        left: &str,
        operator: Operator,
        right: &str,
    ) -> &mut Self {
        self.join(JoinType::Inner, table, |j| {
            j.on(left, operator, right);
        })
    }

    /// `LEFT JOIN table ON left <op> right`, comparing two columns.
    fn left_join(
        &mut self,
        table: impl Into<TableRef>,
        left: &str,
        operator: Operator,
        right: &str,
    ) -> &mut Self {
        self.join(JoinType::Left, table, |j| {
            j.on(left, operator, right);
        })
    }

    /// `RIGHT JOIN table ON left <op> right`, comparing two columns.
    fn right_join(
        &mut self,
        table: impl Into<TableRef>,
        left: &str,
        operator: Operator,
        right: &str,
    ) -> &mut Self {
        self.join(JoinType::Right, table, |j| {
            j.on(left, operator, right);
        })
    }

    /// `CROSS JOIN table`
    fn cross_join(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.join(JoinType::Cross, table, |_| {})
    }
}

/// The ON condition list of one join.
///
/// `on` and `and_on` join with AND, `or_on` with OR; the first condition's
/// separator is never rendered.
#[derive(Debug, Default)]
pub struct JoinOn {
    conditions: Vec<Clause>,
}

impl JoinOn {
    fn push(
        &mut self,
        separator: Separator,
        left: &str,
        operator: Operator,
        right: Operand,
    ) -> &mut Self {
        self.conditions.push(Clause::new(
            separator,
            Condition::Compare {
                column: Expression::from_column(left),
                operator,
                operand: right,
            },
        ));
        self
    }

    /// `left <op> right`, both columns, joined with AND.
    pub fn on(&mut self, left: &str, operator: Operator, right: &str) -> &mut Self {
        self.push(Separator::And, left, operator, Operand::Column(right.to_string()))
    }

    /// `left <op> right`, both columns, joined with AND.
    pub fn and_on(&mut self, left: &str, operator: Operator, right: &str) -> &mut Self {
        self.push(Separator::And, left, operator, Operand::Column(right.to_string()))
    }

    /// `left <op> right`, both columns, joined with OR.
    pub fn or_on(&mut self, left: &str, operator: Operator, right: &str) -> &mut Self {
        self.push(Separator::Or, left, operator, Operand::Column(right.to_string()))
    }

    /// `column <op> value` with a bound value, joined with AND.
    pub fn on_value(
        &mut self,
        column: &str,
        operator: Operator,
        value: impl IntoOperand,
    ) -> &mut Self {
        self.push(Separator::And, column, operator, value.into_operand())
    }

    /// Adds a parenthesized group of ON conditions, joined with AND.
    pub fn on_group(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.group(Separator::And, f)
    }

    /// Adds a parenthesized group of ON conditions, joined with OR.
    pub fn or_on_group(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.group(Separator::Or, f)
    }

    fn group(&mut self, separator: Separator, f: impl FnOnce(&mut Self)) -> &mut Self {
        let mut inner = Self::default();
        f(&mut inner);
        if !inner.conditions.is_empty() {
            self.conditions
                .push(Clause::new(separator, Condition::Nested(inner.conditions)));
        }
        self
    }

    /// Returns the conditions added so far.
    #[must_use]
    pub fn conditions(&self) -> &[Clause] {
        &self.conditions
    }
}
