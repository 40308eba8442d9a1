//! WHERE and HAVING condition builders.
//!
//! A condition is added in two steps. Arming (`where_`, `or_where`,
//! `having`, ...) borrows the owning builder and captures the left-hand side
//! plus the separator; exactly one terminal method (`is`, `between`,
//! `in_list`, ...) then appends the finished clause record and hands the
//! owner back. Terminals consume the cursor, so a cursor can never append
//! twice.
//!
//! ```rust
//! use oxide_query_core::{Compile, Filterable, GenericDialect, Query};
//!
//! let mut select = Query::select();
//! select
//!     .from("users")
//!     .where_("age")
//!     .greater_than(18)
//!     .and_where("active")
//!     .is(true);
//!
//! let (sql, params) = select.to_sql(&GenericDialect::new()).unwrap();
//! assert_eq!(sql, "SELECT * FROM \"users\" WHERE \"age\" > ? AND \"active\" = ?");
//! assert_eq!(params.len(), 2);
//! ```

use crate::error::BuildError;
use crate::expression::Expression;
use crate::statement::{Clause, Operator, Separator, SqlStatement};
use crate::value::{IntoOperand, Operand};

use super::select::SelectStatement;

/// Gives a condition cursor scoped access to a builder's clause store.
pub trait StatementHandle {
    /// Returns the clause store.
    fn statement_mut(&mut self) -> &mut SqlStatement;
}

/// Builders that accept WHERE conditions.
pub trait Filterable: StatementHandle + Sized {
    /// Starts a condition on `column`, joined with AND.
    fn where_(&mut self, column: impl Into<Expression>) -> Where<'_, Self> {
        Where::init(self, column.into(), Separator::And)
    }

    /// Starts a condition on `column`, joined with AND.
    fn and_where(&mut self, column: impl Into<Expression>) -> Where<'_, Self> {
        Where::init(self, column.into(), Separator::And)
    }

    /// Starts a condition on `column`, joined with OR.
    fn or_where(&mut self, column: impl Into<Expression>) -> Where<'_, Self> {
        Where::init(self, column.into(), Separator::Or)
    }

    /// Starts a condition on a composed expression, joined with AND.
    fn where_expr(&mut self, f: impl FnOnce(&mut Expression)) -> Where<'_, Self> {
        Where::init(self, SqlStatement::closure_to_expression(f), Separator::And)
    }

    /// Starts a condition on a composed expression, joined with OR.
    fn or_where_expr(&mut self, f: impl FnOnce(&mut Expression)) -> Where<'_, Self> {
        Where::init(self, SqlStatement::closure_to_expression(f), Separator::Or)
    }

    /// Adds a parenthesized group, joined with AND.
    fn where_group(&mut self, f: impl FnOnce(&mut WhereGroup)) -> &mut Self {
        add_where_group(self, Separator::And, f)
    }

    /// Adds a parenthesized group, joined with OR.
    fn or_where_group(&mut self, f: impl FnOnce(&mut WhereGroup)) -> &mut Self {
        add_where_group(self, Separator::Or, f)
    }

    /// Adds `EXISTS (SELECT ...)`, joined with AND.
    fn where_exists(&mut self, f: impl FnOnce(&mut SelectStatement)) -> &mut Self {
        add_exists(self, Separator::And, false, f)
    }

    /// Adds `EXISTS (SELECT ...)`, joined with OR.
    fn or_where_exists(&mut self, f: impl FnOnce(&mut SelectStatement)) -> &mut Self {
        add_exists(self, Separator::Or, false, f)
    }

    /// Adds `NOT EXISTS (SELECT ...)`, joined with AND.
    fn where_not_exists(&mut self, f: impl FnOnce(&mut SelectStatement)) -> &mut Self {
        add_exists(self, Separator::And, true, f)
    }

    /// Adds `NOT EXISTS (SELECT ...)`, joined with OR.
    fn or_where_not_exists(&mut self, f: impl FnOnce(&mut SelectStatement)) -> &mut Self {
        add_exists(self, Separator::Or, true, f)
    }
}

fn add_where_group<O: StatementHandle>(
    owner: &mut O,
    separator: Separator,
    f: impl FnOnce(&mut WhereGroup),
) -> &mut O {
    let mut group = WhereGroup::default();
    f(&mut group);
    owner
        .statement_mut()
        .add_where_condition_group(separator, group.statement.wheres);
    owner
}

fn add_exists<O: StatementHandle>(
    owner: &mut O,
    separator: Separator,
    not: bool,
    f: impl FnOnce(&mut SelectStatement),
) -> &mut O {
    let query = sub_select(f);
    owner
        .statement_mut()
        .add_where_exists_condition(separator, query, not);
    owner
}

fn sub_select(f: impl FnOnce(&mut SelectStatement)) -> SqlStatement {
    let mut select = SelectStatement::new();
    f(&mut select);
    select.into_statement()
}

fn operands<I, T>(values: I) -> Vec<Operand>
where
    I: IntoIterator<Item = T>,
    T: IntoOperand,
{
    values.into_iter().map(IntoOperand::into_operand).collect()
}

/// An armed WHERE condition waiting for its operator.
#[must_use = "a condition is only added once an operator method is called"]
pub struct Where<'a, O> {
    owner: &'a mut O,
    column: Expression,
    separator: Separator,
}

impl<'a, O: StatementHandle> Where<'a, O> {
    /// Arms a cursor for one clause.
    pub fn init(owner: &'a mut O, column: Expression, separator: Separator) -> Self {
        Self {
            owner,
            column,
            separator,
        }
    }

    fn compare(self, operator: Operator, operand: Operand) -> &'a mut O {
        let Self {
            owner,
            column,
            separator,
        } = self;
        owner
            .statement_mut()
            .add_where_condition(separator, column, operator, operand);
        owner
    }

    /// `column = value`; pass [`col`](crate::col) to compare two columns.
    pub fn is(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::Eq, value.into_operand())
    }

    /// `column != value`
    pub fn is_not(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::NotEq, value.into_operand())
    }

    /// `column < value`
    pub fn less_than(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::Lt, value.into_operand())
    }

    /// `column > value`
    pub fn greater_than(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::Gt, value.into_operand())
    }

    /// `column >= value`
    pub fn at_least(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::GtEq, value.into_operand())
    }

    /// `column <= value`
    pub fn at_most(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::LtEq, value.into_operand())
    }

    fn between_impl(self, low: Operand, high: Operand, not: bool) -> &'a mut O {
        let Self {
            owner,
            column,
            separator,
        } = self;
        owner
            .statement_mut()
            .add_where_between_condition(separator, column, low, high, not);
        owner
    }

    /// `column BETWEEN low AND high`
    pub fn between(self, low: impl IntoOperand, high: impl IntoOperand) -> &'a mut O {
        self.between_impl(low.into_operand(), high.into_operand(), false)
    }

    /// `column NOT BETWEEN low AND high`
    pub fn not_between(self, low: impl IntoOperand, high: impl IntoOperand) -> &'a mut O {
        self.between_impl(low.into_operand(), high.into_operand(), true)
    }

    fn like_impl(self, pattern: Operand, not: bool) -> &'a mut O {
        let Self {
            owner,
            column,
            separator,
        } = self;
        owner
            .statement_mut()
            .add_where_like_condition(separator, column, pattern, not);
        owner
    }

    /// `column LIKE pattern`
    pub fn like(self, pattern: impl IntoOperand) -> &'a mut O {
        self.like_impl(pattern.into_operand(), false)
    }

    /// `column NOT LIKE pattern`
    pub fn not_like(self, pattern: impl IntoOperand) -> &'a mut O {
        self.like_impl(pattern.into_operand(), true)
    }

    fn in_impl(self, values: Vec<Operand>, not: bool) -> Result<&'a mut O, BuildError> {
        let Self {
            owner,
            column,
            separator,
        } = self;
        owner
            .statement_mut()
            .add_where_in_condition(separator, column, values, not)?;
        Ok(owner)
    }

    /// `column IN (v1, v2, ...)`
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyInList`] when `values` is empty.
    pub fn in_list<I, T>(self, values: I) -> Result<&'a mut O, BuildError>
    where
        I: IntoIterator<Item = T>,
        T: IntoOperand,
    {
        self.in_impl(operands(values), false)
    }

    /// `column NOT IN (v1, v2, ...)`
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyInList`] when `values` is empty.
    pub fn not_in_list<I, T>(self, values: I) -> Result<&'a mut O, BuildError>
    where
        I: IntoIterator<Item = T>,
        T: IntoOperand,
    {
        self.in_impl(operands(values), true)
    }

    fn in_select_impl(self, f: impl FnOnce(&mut SelectStatement), not: bool) -> &'a mut O {
        let Self {
            owner,
            column,
            separator,
        } = self;
        let query = sub_select(f);
        owner
            .statement_mut()
            .add_where_in_select(separator, column, query, not);
        owner
    }

    /// `column IN (SELECT ...)`
    pub fn in_select(self, f: impl FnOnce(&mut SelectStatement)) -> &'a mut O {
        self.in_select_impl(f, false)
    }

    /// `column NOT IN (SELECT ...)`
    pub fn not_in_select(self, f: impl FnOnce(&mut SelectStatement)) -> &'a mut O {
        self.in_select_impl(f, true)
    }

    fn null_impl(self, not: bool) -> &'a mut O {
        let Self {
            owner,
            column,
            separator,
        } = self;
        owner
            .statement_mut()
            .add_where_null_condition(separator, column, not);
        owner
    }

    /// `column IS NULL`
    pub fn is_null(self) -> &'a mut O {
        self.null_impl(false)
    }

    /// `column IS NOT NULL`
    pub fn not_null(self) -> &'a mut O {
        self.null_impl(true)
    }

    /// Uses the armed column or expression as a boolean condition by itself.
    pub fn nop(self) -> &'a mut O {
        let Self {
            owner,
            column,
            separator,
        } = self;
        owner.statement_mut().add_where_nop(separator, column);
        owner
    }
}

/// The builder handed to WHERE group callbacks.
#[derive(Debug, Default)]
pub struct WhereGroup {
    statement: SqlStatement,
}

impl WhereGroup {
    /// Returns the clauses added so far.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.statement.wheres
    }
}

impl StatementHandle for WhereGroup {
    fn statement_mut(&mut self) -> &mut SqlStatement {
        &mut self.statement
    }
}

impl Filterable for WhereGroup {}

/// Builders that accept HAVING conditions.
pub trait HavingFilterable: StatementHandle + Sized {
    /// Starts a HAVING condition on `column`, joined with AND.
    fn having(&mut self, column: impl Into<Expression>) -> Having<'_, Self> {
        Having::init(self, column.into(), Separator::And)
    }

    /// Starts a HAVING condition on `column`, joined with AND.
    fn and_having(&mut self, column: impl Into<Expression>) -> Having<'_, Self> {
        Having::init(self, column.into(), Separator::And)
    }

    /// Starts a HAVING condition on `column`, joined with OR.
    fn or_having(&mut self, column: impl Into<Expression>) -> Having<'_, Self> {
        Having::init(self, column.into(), Separator::Or)
    }

    /// Starts a HAVING condition on an aggregate expression, joined with AND.
    fn having_expr(&mut self, f: impl FnOnce(&mut Expression)) -> Having<'_, Self> {
        Having::init(self, SqlStatement::closure_to_expression(f), Separator::And)
    }

    /// Starts a HAVING condition on an aggregate expression, joined with OR.
    fn or_having_expr(&mut self, f: impl FnOnce(&mut Expression)) -> Having<'_, Self> {
        Having::init(self, SqlStatement::closure_to_expression(f), Separator::Or)
    }

    /// Adds a parenthesized HAVING group, joined with AND.
    fn having_group(&mut self, f: impl FnOnce(&mut HavingGroup)) -> &mut Self {
        add_having_group(self, Separator::And, f)
    }

    /// Adds a parenthesized HAVING group, joined with OR.
    fn or_having_group(&mut self, f: impl FnOnce(&mut HavingGroup)) -> &mut Self {
        add_having_group(self, Separator::Or, f)
    }
}

fn add_having_group<O: StatementHandle>(
    owner: &mut O,
    separator: Separator,
    f: impl FnOnce(&mut HavingGroup),
) -> &mut O {
    let mut group = HavingGroup::default();
    f(&mut group);
    owner
        .statement_mut()
        .add_having_condition_group(separator, group.statement.having);
    owner
}

/// An armed HAVING condition waiting for its operator.
#[must_use = "a condition is only added once an operator method is called"]
pub struct Having<'a, O> {
    owner: &'a mut O,
    column: Expression,
    separator: Separator,
}

impl<'a, O: StatementHandle> Having<'a, O> {
    /// Arms a cursor for one clause.
    pub fn init(owner: &'a mut O, column: Expression, separator: Separator) -> Self {
        Self {
            owner,
            column,
            separator,
        }
    }

    fn compare(self, operator: Operator, operand: Operand) -> &'a mut O {
        let Self {
            owner,
            column,
            separator,
        } = self;
        owner
            .statement_mut()
            .add_having_condition(separator, column, operator, operand);
        owner
    }

    /// `aggregate = value`
    pub fn eq(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::Eq, value.into_operand())
    }

    /// `aggregate != value`
    pub fn ne(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::NotEq, value.into_operand())
    }

    /// `aggregate < value`
    pub fn lt(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::Lt, value.into_operand())
    }

    /// `aggregate > value`
    pub fn gt(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::Gt, value.into_operand())
    }

    /// `aggregate <= value`
    pub fn lte(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::LtEq, value.into_operand())
    }

    /// `aggregate >= value`
    pub fn gte(self, value: impl IntoOperand) -> &'a mut O {
        self.compare(Operator::GtEq, value.into_operand())
    }

    fn in_impl(self, values: Vec<Operand>, not: bool) -> Result<&'a mut O, BuildError> {
        let Self {
            owner,
            column,
            separator,
        } = self;
        owner
            .statement_mut()
            .add_having_in_condition(separator, column, values, not)?;
        Ok(owner)
    }

    /// `aggregate IN (v1, v2, ...)`
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyInList`] when `values` is empty.
    pub fn in_list<I, T>(self, values: I) -> Result<&'a mut O, BuildError>
    where
        I: IntoIterator<Item = T>,
        T: IntoOperand,
    {
        self.in_impl(operands(values), false)
    }

    /// `aggregate NOT IN (v1, v2, ...)`
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyInList`] when `values` is empty.
    pub fn not_in_list<I, T>(self, values: I) -> Result<&'a mut O, BuildError>
    where
        I: IntoIterator<Item = T>,
        T: IntoOperand,
    {
        self.in_impl(operands(values), true)
    }

    fn between_impl(self, low: Operand, high: Operand, not: bool) -> &'a mut O {
        let Self {
            owner,
            column,
            separator,
        } = self;
        owner
            .statement_mut()
            .add_having_between_condition(separator, column, low, high, not);
        owner
    }

    /// `aggregate BETWEEN low AND high`
    pub fn between(self, low: impl IntoOperand, high: impl IntoOperand) -> &'a mut O {
        self.between_impl(low.into_operand(), high.into_operand(), false)
    }

    /// `aggregate NOT BETWEEN low AND high`
    pub fn not_between(self, low: impl IntoOperand, high: impl IntoOperand) -> &'a mut O {
        self.between_impl(low.into_operand(), high.into_operand(), true)
    }
}

/// The builder handed to HAVING group callbacks.
#[derive(Debug, Default)]
pub struct HavingGroup {
    statement: SqlStatement,
}

impl HavingGroup {
    /// Returns the clauses added so far.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.statement.having
    }
}

impl StatementHandle for HavingGroup {
    fn statement_mut(&mut self) -> &mut SqlStatement {
        &mut self.statement
    }
}

impl HavingFilterable for HavingGroup {}
