//! Expression trees.
//!
//! An [`Expression`] is a flat sequence of [`Node`]s rendered one after the
//! other, separated by a single space. Nesting happens through
//! [`Node::Group`], function arguments and embedded sub-selects.
//!
//! ```rust
//! use oxide_query_core::{Expression, GenericDialect, Compiler};
//!
//! let mut expr = Expression::new();
//! expr.column("age").op("+").value(1);
//!
//! let dialect = GenericDialect::new();
//! let mut compiler = Compiler::new(&dialect);
//! assert_eq!(compiler.expression(&expr).unwrap(), "\"age\" + ?");
//! ```

use crate::builder::SelectStatement;
use crate::statement::{SqlStatement, TableRef};
use crate::value::{Operand, SqlValue, ToSqlValue};

/// Well-known SQL functions.
///
/// Dialects map each function to the keyword of their engine, or report it
/// as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `COUNT(x)`
    Count,
    /// `COUNT(DISTINCT x)`
    CountDistinct,
    /// `AVG(x)`
    Avg,
    /// `SUM(x)`
    Sum,
    /// `MIN(x)`
    Min,
    /// `MAX(x)`
    Max,
    /// Upper-case a string.
    Ucase,
    /// Lower-case a string.
    Lcase,
    /// Substring extraction: `(string, start, length)`.
    Mid,
    /// String length.
    Len,
    /// Numeric rounding: `(number, decimals)`.
    Round,
    /// Number formatting: `(number, decimals)`.
    Format,
    /// Current date and time.
    Now,
}

impl Function {
    /// Returns the ANSI-style keyword used when a dialect does not override it.
    #[must_use]
    pub const fn standard_name(&self) -> &'static str {
        match self {
            Self::Count | Self::CountDistinct => "COUNT",
            Self::Avg => "AVG",
            Self::Sum => "SUM",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Ucase => "UPPER",
            Self::Lcase => "LOWER",
            Self::Mid => "SUBSTRING",
            Self::Len => "LENGTH",
            Self::Round => "ROUND",
            Self::Format => "FORMAT",
            Self::Now => "NOW",
        }
    }
}

/// A single expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A column reference, wrapped by the dialect.
    Column(String),
    /// A raw operator or keyword token, emitted verbatim.
    Op(String),
    /// A bound value.
    Value(SqlValue),
    /// A parenthesized sub-expression.
    Group(Expression),
    /// A well-known function call.
    Function {
        /// The function.
        function: Function,
        /// The arguments.
        args: Vec<Expression>,
    },
    /// A call to a function by name (dialect-specific functions).
    Call {
        /// The function name, emitted verbatim.
        name: String,
        /// The arguments.
        args: Vec<Expression>,
    },
    /// An embedded SELECT.
    Subquery(Box<SqlStatement>),
}

/// A composable SQL expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    nodes: Vec<Node>,
}

impl Expression {
    /// Creates an empty expression.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an expression holding a single column reference.
    #[must_use]
    pub fn from_column(name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::Column(name.into())],
        }
    }

    /// Creates an expression holding a single bound value.
    #[must_use]
    pub fn from_value(value: impl ToSqlValue) -> Self {
        Self {
            nodes: vec![Node::Value(value.to_sql_value())],
        }
    }

    /// Creates an expression from an operand.
    #[must_use]
    pub fn from_operand(operand: Operand) -> Self {
        match operand {
            Operand::Value(v) => Self::from_value(v),
            Operand::Column(name) => Self::from_column(name),
            Operand::Expression(expr) => expr,
        }
    }

    /// Returns the nodes in rendering order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns `true` if no node has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a raw node.
    pub fn push(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Appends a column reference.
    pub fn column(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Node::Column(name.into()))
    }

    /// Appends an operator token such as `+`, `=` or `AND`.
    ///
    /// The token is emitted verbatim and must never carry user input.
    pub fn op(&mut self, token: impl Into<String>) -> &mut Self {
        self.push(Node::Op(token.into()))
    }

    /// Appends a bound value.
    pub fn value(&mut self, value: impl ToSqlValue) -> &mut Self {
        self.push(Node::Value(value.to_sql_value()))
    }

    /// Appends a parenthesized group built by `f`.
    pub fn group(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        let inner = SqlStatement::closure_to_expression(f);
        self.push(Node::Group(inner))
    }

    /// Appends a sub-select reading from `table`, refined by `f`.
    pub fn from(
        &mut self,
        table: impl Into<String>,
        f: impl FnOnce(&mut SelectStatement),
    ) -> &mut Self {
        let mut select = SelectStatement::new();
        select.from(TableRef::table(table));
        f(&mut select);
        self.push(Node::Subquery(Box::new(select.into_statement())))
    }

    /// Appends a call to a well-known function.
    pub fn function(&mut self, function: Function, args: Vec<Self>) -> &mut Self {
        self.push(Node::Function { function, args })
    }

    fn column_function(&mut self, function: Function, column: impl Into<String>) -> &mut Self {
        self.function(function, vec![Self::from_column(column)])
    }

    /// Appends `COUNT(column)`. Pass `"*"` for `COUNT(*)`.
    pub fn count(&mut self, column: impl Into<String>) -> &mut Self {
        self.column_function(Function::Count, column)
    }

    /// Appends `COUNT(DISTINCT column)`.
    pub fn count_distinct(&mut self, column: impl Into<String>) -> &mut Self {
        self.column_function(Function::CountDistinct, column)
    }

    /// Appends `AVG(column)`.
    pub fn avg(&mut self, column: impl Into<String>) -> &mut Self {
        self.column_function(Function::Avg, column)
    }

    /// Appends `SUM(column)`.
    pub fn sum(&mut self, column: impl Into<String>) -> &mut Self {
        self.column_function(Function::Sum, column)
    }

    /// Appends `MIN(column)`.
    pub fn min(&mut self, column: impl Into<String>) -> &mut Self {
        self.column_function(Function::Min, column)
    }

    /// Appends `MAX(column)`.
    pub fn max(&mut self, column: impl Into<String>) -> &mut Self {
        self.column_function(Function::Max, column)
    }

    /// Appends the upper-case function applied to `column`.
    pub fn ucase(&mut self, column: impl Into<String>) -> &mut Self {
        self.column_function(Function::Ucase, column)
    }

    /// Appends the lower-case function applied to `column`.
    pub fn lcase(&mut self, column: impl Into<String>) -> &mut Self {
        self.column_function(Function::Lcase, column)
    }

    /// Appends the substring function; `start` and `length` are bound.
    pub fn mid(&mut self, column: impl Into<String>, start: i64, length: i64) -> &mut Self {
        self.function(
            Function::Mid,
            vec![
                Self::from_column(column),
                Self::from_value(start),
                Self::from_value(length),
            ],
        )
    }

    /// Appends the string length function.
    pub fn len(&mut self, column: impl Into<String>) -> &mut Self {
        self.column_function(Function::Len, column)
    }

    /// Appends `ROUND(column, decimals)`; `decimals` is bound.
    pub fn round(&mut self, column: impl Into<String>, decimals: i32) -> &mut Self {
        self.function(
            Function::Round,
            vec![Self::from_column(column), Self::from_value(decimals)],
        )
    }

    /// Appends `FORMAT(column, decimals)`; `decimals` is bound.
    pub fn format(&mut self, column: impl Into<String>, decimals: i32) -> &mut Self {
        self.function(
            Function::Format,
            vec![Self::from_column(column), Self::from_value(decimals)],
        )
    }

    /// Appends the current timestamp function.
    pub fn now(&mut self) -> &mut Self {
        self.function(Function::Now, Vec::new())
    }

    /// Appends a call to an arbitrary, dialect-specific function.
    ///
    /// The name is emitted verbatim; arguments follow the usual operand
    /// rules (values are bound, columns are wrapped).
    pub fn call<I>(&mut self, name: impl Into<String>, args: I) -> &mut Self
    where
        I: IntoIterator<Item = Operand>,
    {
        let args = args.into_iter().map(Self::from_operand).collect();
        self.push(Node::Call {
            name: name.into(),
            args,
        })
    }
}

impl From<&str> for Expression {
    fn from(name: &str) -> Self {
        Self::from_column(name)
    }
}

impl From<String> for Expression {
    fn from(name: String) -> Self {
        Self::from_column(name)
    }
}
