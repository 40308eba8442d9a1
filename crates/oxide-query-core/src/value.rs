//! Bound values and operands.
//!
//! Every value a statement carries ends up as a positional parameter, never
//! as inline SQL text. Operands describe the right-hand side of a comparison,
//! SET assignment or INSERT cell: either a bound value, a column reference or
//! a composed [`Expression`].

use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::expression::Expression;

/// A SQL value that is bound as a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
    /// Date/time value.
    ///
    /// Never handed to a driver as-is: the compiler formats it with its
    /// date format into [`SqlValue::Text`] when binding.
    Timestamp(NaiveDateTime),
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

macro_rules! int_to_sql_value {
    ($($ty:ty),*) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::Int(i64::from(self))
                }
            }
        )*
    };
}

int_to_sql_value!(i8, i16, i32, u8, u16, u32);

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl ToSqlValue for &String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

impl ToSqlValue for &[u8] {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self.to_vec())
    }
}

impl ToSqlValue for NaiveDateTime {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Timestamp(self)
    }
}

impl<Tz: TimeZone> ToSqlValue for DateTime<Tz> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Timestamp(self.naive_utc())
    }
}

/// The right-hand side of a comparison, assignment or insert cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A bound value, rendered as a placeholder.
    Value(SqlValue),
    /// A column reference, rendered as a wrapped identifier.
    Column(String),
    /// A composed expression.
    Expression(Expression),
}

/// Creates a column operand.
///
/// Comparing against `col("payments.order_id")` compares two columns;
/// comparing against a plain `"payments.order_id"` binds a string.
#[must_use]
pub fn col(name: impl Into<String>) -> Operand {
    Operand::Column(name.into())
}

/// Trait for types usable as an [`Operand`].
pub trait IntoOperand {
    /// Converts into an operand.
    fn into_operand(self) -> Operand;
}

impl<T: ToSqlValue> IntoOperand for T {
    fn into_operand(self) -> Operand {
        Operand::Value(self.to_sql_value())
    }
}

impl IntoOperand for Operand {
    fn into_operand(self) -> Operand {
        self
    }
}

impl IntoOperand for Expression {
    fn into_operand(self) -> Operand {
        Operand::Expression(self)
    }
}

impl From<Operand> for Expression {
    fn from(operand: Operand) -> Self {
        Self::from_operand(operand)
    }
}
