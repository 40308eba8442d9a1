//! The clause store shared by every statement wrapper.
//!
//! [`SqlStatement`] is plain data: ordered clause lists plus scalar settings.
//! Builders mutate it through the `add_*`/`set_*` methods below and the
//! [`Compiler`](crate::Compiler) reads it. Every nested expression and
//! sub-statement is owned, so `clone()` is a deep copy and two clones never
//! share mutable state.

use crate::error::BuildError;
use crate::expression::Expression;
use crate::value::Operand;

/// How a clause joins the clause before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// `AND`
    #[default]
    And,
    /// `OR`
    Or,
}

impl Separator {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `=`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
}

impl Operator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

/// The predicate of a clause record.
///
/// This is the closed set of clause kinds the compiler knows how to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column <op> operand`
    Compare {
        /// Left-hand side.
        column: Expression,
        /// Comparison operator.
        operator: Operator,
        /// Right-hand side.
        operand: Operand,
    },
    /// `column [NOT] BETWEEN low AND high`
    Between {
        /// Left-hand side.
        column: Expression,
        /// Lower bound.
        low: Operand,
        /// Upper bound.
        high: Operand,
        /// Negated.
        not: bool,
    },
    /// `column [NOT] LIKE pattern`
    Like {
        /// Left-hand side.
        column: Expression,
        /// The pattern.
        pattern: Operand,
        /// Negated.
        not: bool,
    },
    /// `column [NOT] IN (v1, v2, ...)`; never empty.
    In {
        /// Left-hand side.
        column: Expression,
        /// The candidates.
        values: Vec<Operand>,
        /// Negated.
        not: bool,
    },
    /// `column [NOT] IN (SELECT ...)`
    InSelect {
        /// Left-hand side.
        column: Expression,
        /// The sub-select.
        query: Box<SqlStatement>,
        /// Negated.
        not: bool,
    },
    /// `column IS [NOT] NULL`
    Null {
        /// Left-hand side.
        column: Expression,
        /// Negated.
        not: bool,
    },
    /// `[NOT] EXISTS (SELECT ...)`
    Exists {
        /// The sub-select.
        query: Box<SqlStatement>,
        /// Negated.
        not: bool,
    },
    /// A parenthesized list of clauses; never empty.
    Nested(Vec<Clause>),
    /// A raw boolean expression.
    Nop(Expression),
}

/// One WHERE, HAVING or JOIN ON condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Joins this clause to the previous one; ignored on the first clause.
    pub separator: Separator,
    /// The predicate.
    pub condition: Condition,
}

impl Clause {
    /// Creates a clause record.
    #[must_use]
    pub const fn new(separator: Separator, condition: Condition) -> Self {
        Self {
            separator,
            condition,
        }
    }
}

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// An ORDER BY entry: the direction and null ordering apply to every column.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The expressions to order by.
    pub columns: Vec<Expression>,
    /// The direction (ASC or DESC).
    pub direction: OrderDirection,
    /// Null ordering (optional).
    pub nulls: Option<NullOrdering>,
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN.
    Inner,
    /// LEFT OUTER JOIN.
    Left,
    /// RIGHT OUTER JOIN.
    Right,
    /// FULL OUTER JOIN.
    Full,
    /// CROSS JOIN.
    Cross,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// A table reference, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Table name, optionally schema-qualified with a dot.
    pub name: String,
    /// Alias.
    pub alias: Option<String>,
}

impl TableRef {
    /// Creates a simple table reference.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Creates an aliased table reference.
    #[must_use]
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        Self::table(name)
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        Self::table(name)
    }
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The type of join.
    pub kind: JoinType,
    /// The joined table.
    pub table: TableRef,
    /// The ON conditions (empty for CROSS joins).
    pub conditions: Vec<Clause>,
}

/// A column in the SELECT list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectColumn {
    /// The expression.
    pub expr: Expression,
    /// Column alias.
    pub alias: Option<String>,
}

/// The INSERT (or SELECT ... INTO) target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntoTarget {
    /// Table name.
    pub table: String,
    /// Database (schema) qualifier.
    pub database: Option<String>,
}

/// An assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Column name.
    pub column: String,
    /// New value.
    pub value: Operand,
}

/// The mutable clause store behind one statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SqlStatement {
    /// Tables read from (FROM), or updated (UPDATE).
    pub tables: Vec<TableRef>,
    /// The SELECT list; empty means `*`.
    pub columns: Vec<SelectColumn>,
    /// WHERE clauses.
    pub wheres: Vec<Clause>,
    /// HAVING clauses.
    pub having: Vec<Clause>,
    /// JOIN clauses.
    pub joins: Vec<Join>,
    /// GROUP BY expressions.
    pub group: Vec<Expression>,
    /// ORDER BY entries.
    pub order: Vec<OrderBy>,
    /// LIMIT.
    pub limit: Option<u64>,
    /// OFFSET.
    pub offset: Option<u64>,
    /// SELECT DISTINCT.
    pub distinct: bool,
    /// INSERT target, or SELECT ... INTO target.
    pub into: Option<IntoTarget>,
    /// INSERT column order; `None` until the first row locks it in.
    pub insert_columns: Option<Vec<String>>,
    /// INSERT VALUES rows, aligned with `insert_columns`.
    pub values: Vec<Vec<Operand>>,
    /// INSERT ... SELECT source.
    pub insert_source: Option<Box<SqlStatement>>,
    /// UPDATE SET assignments.
    pub assignments: Vec<Assignment>,
    /// Multi-table DELETE targets, rendered between DELETE and FROM.
    pub delete_targets: Vec<String>,
}

impl SqlStatement {
    /// Creates an empty statement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a composition callback against a fresh expression.
    ///
    /// This is the only place callbacks become expressions; everything the
    /// store keeps afterwards is plain data.
    pub fn closure_to_expression(f: impl FnOnce(&mut Expression)) -> Expression {
        let mut expr = Expression::new();
        f(&mut expr);
        expr
    }

    // WHERE

    /// Adds `column <op> operand`.
    pub fn add_where_condition(
        &mut self,
        separator: Separator,
        column: Expression,
        operator: Operator,
        operand: Operand,
    ) {
        push(
            &mut self.wheres,
            separator,
            Condition::Compare {
                column,
                operator,
                operand,
            },
        );
    }

    /// Adds `column [NOT] BETWEEN low AND high`.
    pub fn add_where_between_condition(
        &mut self,
        separator: Separator,
        column: Expression,
        low: Operand,
        high: Operand,
        not: bool,
    ) {
        push(
            &mut self.wheres,
            separator,
            Condition::Between {
                column,
                low,
                high,
                not,
            },
        );
    }

    /// Adds `column [NOT] LIKE pattern`.
    pub fn add_where_like_condition(
        &mut self,
        separator: Separator,
        column: Expression,
        pattern: Operand,
        not: bool,
    ) {
        push(
            &mut self.wheres,
            separator,
            Condition::Like {
                column,
                pattern,
                not,
            },
        );
    }

    /// Adds `column [NOT] IN (...)`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyInList`] when `values` is empty.
    pub fn add_where_in_condition(
        &mut self,
        separator: Separator,
        column: Expression,
        values: Vec<Operand>,
        not: bool,
    ) -> Result<(), BuildError> {
        let condition = in_condition("WHERE", column, values, not)?;
        push(&mut self.wheres, separator, condition);
        Ok(())
    }

    /// Adds `column [NOT] IN (SELECT ...)`.
    pub fn add_where_in_select(
        &mut self,
        separator: Separator,
        column: Expression,
        query: Self,
        not: bool,
    ) {
        push(
            &mut self.wheres,
            separator,
            Condition::InSelect {
                column,
                query: Box::new(query),
                not,
            },
        );
    }

    /// Adds `column IS [NOT] NULL`.
    pub fn add_where_null_condition(
        &mut self,
        separator: Separator,
        column: Expression,
        not: bool,
    ) {
        push(&mut self.wheres, separator, Condition::Null { column, not });
    }

    /// Adds `[NOT] EXISTS (SELECT ...)`.
    pub fn add_where_exists_condition(&mut self, separator: Separator, query: Self, not: bool) {
        push(
            &mut self.wheres,
            separator,
            Condition::Exists {
                query: Box::new(query),
                not,
            },
        );
    }

    /// Adds a parenthesized group of clauses. Empty groups are dropped.
    pub fn add_where_condition_group(&mut self, separator: Separator, clauses: Vec<Clause>) {
        push_group(&mut self.wheres, separator, clauses);
    }

    /// Adds a raw boolean expression.
    pub fn add_where_nop(&mut self, separator: Separator, expr: Expression) {
        push(&mut self.wheres, separator, Condition::Nop(expr));
    }

    // HAVING

    /// Adds `aggregate <op> operand` to HAVING.
    pub fn add_having_condition(
        &mut self,
        separator: Separator,
        column: Expression,
        operator: Operator,
        operand: Operand,
    ) {
        push(
            &mut self.having,
            separator,
            Condition::Compare {
                column,
                operator,
                operand,
            },
        );
    }

    /// Adds `aggregate [NOT] BETWEEN low AND high` to HAVING.
    pub fn add_having_between_condition(
        &mut self,
        separator: Separator,
        column: Expression,
        low: Operand,
        high: Operand,
        not: bool,
    ) {
        push(
            &mut self.having,
            separator,
            Condition::Between {
                column,
                low,
                high,
                not,
            },
        );
    }

    /// Adds `aggregate [NOT] IN (...)` to HAVING.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyInList`] when `values` is empty.
    pub fn add_having_in_condition(
        &mut self,
        separator: Separator,
        column: Expression,
        values: Vec<Operand>,
        not: bool,
    ) -> Result<(), BuildError> {
        let condition = in_condition("HAVING", column, values, not)?;
        push(&mut self.having, separator, condition);
        Ok(())
    }

    /// Adds a parenthesized group to HAVING. Empty groups are dropped.
    pub fn add_having_condition_group(&mut self, separator: Separator, clauses: Vec<Clause>) {
        push_group(&mut self.having, separator, clauses);
    }

    // Everything else

    /// Adds a JOIN clause.
    pub fn add_join_clause(&mut self, join: Join) {
        self.joins.push(join);
    }

    /// Adds a column to the SELECT list.
    pub fn add_column(&mut self, expr: Expression, alias: Option<String>) {
        self.columns.push(SelectColumn { expr, alias });
    }

    /// Adds an ORDER BY entry.
    pub fn add_order(&mut self, order: OrderBy) {
        self.order.push(order);
    }

    /// Adds a GROUP BY expression.
    pub fn add_group_by(&mut self, expr: Expression) {
        self.group.push(expr);
    }

    /// Adds tables to FROM (or to the UPDATE target list).
    pub fn add_tables<I>(&mut self, tables: I)
    where
        I: IntoIterator<Item = TableRef>,
    {
        self.tables.extend(tables);
    }

    /// Adds one VALUES row, aligned with the insert column order.
    pub fn add_values(&mut self, row: Vec<Operand>) {
        self.values.push(row);
    }

    /// Adds an UPDATE SET assignment.
    pub fn add_assignment(&mut self, column: String, value: Operand) {
        self.assignments.push(Assignment { column, value });
    }

    /// Sets LIMIT.
    pub fn set_limit(&mut self, limit: Option<u64>) {
        self.limit = limit;
    }

    /// Sets OFFSET.
    pub fn set_offset(&mut self, offset: Option<u64>) {
        self.offset = offset;
    }

    /// Sets DISTINCT.
    pub fn set_distinct(&mut self, distinct: bool) {
        self.distinct = distinct;
    }

    /// Sets the INSERT (or SELECT ... INTO) target.
    pub fn set_into(&mut self, table: impl Into<String>, database: Option<String>) {
        self.into = Some(IntoTarget {
            table: table.into(),
            database,
        });
    }

    /// Locks in the INSERT column order.
    pub fn set_insert_columns(&mut self, columns: Vec<String>) {
        self.insert_columns = Some(columns);
    }

    /// Sets the INSERT ... SELECT source.
    pub fn set_insert_source(&mut self, query: Self) {
        self.insert_source = Some(Box::new(query));
    }

    /// Sets the multi-table DELETE targets.
    pub fn set_delete_targets(&mut self, targets: Vec<String>) {
        self.delete_targets = targets;
    }
}

fn push(list: &mut Vec<Clause>, separator: Separator, condition: Condition) {
    list.push(Clause::new(separator, condition));
}

fn push_group(list: &mut Vec<Clause>, separator: Separator, clauses: Vec<Clause>) {
    if !clauses.is_empty() {
        push(list, separator, Condition::Nested(clauses));
    }
}

fn in_condition(
    clause: &'static str,
    column: Expression,
    values: Vec<Operand>,
    not: bool,
) -> Result<Condition, BuildError> {
    if values.is_empty() {
        return Err(BuildError::EmptyInList { clause });
    }
    Ok(Condition::In {
        column,
        values,
        not,
    })
}
