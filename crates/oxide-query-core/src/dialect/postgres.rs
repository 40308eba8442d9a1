//! PostgreSQL dialect.

use super::{unsupported, Dialect};
use crate::error::Result;
use crate::expression::Function;

/// PostgreSQL dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn placeholder(&self, position: usize) -> String {
        format!("${position}")
    }

    fn autoincrement_keyword(&self) -> &'static str {
        // Serial types replace the keyword.
        ""
    }

    fn function_name(&self, function: Function) -> Result<&'static str> {
        match function {
            // format() exists, but it is printf-style string formatting.
            Function::Format => Err(unsupported(self, "FORMAT()")),
            other => Ok(other.standard_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompileError;

    #[test]
    fn test_postgres_dialect() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.name(), "postgresql");
        assert_eq!(dialect.quote_identifier("users"), "\"users\"");
        assert_eq!(dialect.placeholder(1), "$1");
        assert_eq!(dialect.placeholder(12), "$12");
        assert_eq!(dialect.autoincrement_keyword(), "");
    }

    #[test]
    fn test_postgres_functions() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.function_name(Function::Ucase).unwrap(), "UPPER");
        assert_eq!(dialect.function_name(Function::Mid).unwrap(), "SUBSTRING");
        assert_eq!(
            dialect.function_name(Function::Format).unwrap_err(),
            CompileError::unsupported("postgresql", "FORMAT()")
        );
    }
}
