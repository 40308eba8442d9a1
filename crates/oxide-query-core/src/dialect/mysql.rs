//! MySQL dialect.

use super::{unsupported, Dialect};
use crate::error::Result;
use crate::expression::Function;
use crate::statement::NullOrdering;

/// MySQL / MariaDB dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        match (limit, offset) {
            (Some(n), Some(o)) => format!(" LIMIT {o}, {n}"),
            (Some(n), None) => format!(" LIMIT {n}"),
            // MySQL has no bare OFFSET; the documented workaround is the
            // largest row count it accepts.
            (None, Some(o)) => format!(" LIMIT {o}, {}", u64::MAX),
            (None, None) => String::new(),
        }
    }

    fn function_name(&self, function: Function) -> Result<&'static str> {
        Ok(match function {
            Function::Ucase => "UCASE",
            Function::Lcase => "LCASE",
            Function::Mid => "MID",
            other => other.standard_name(),
        })
    }

    fn null_ordering(&self, nulls: NullOrdering) -> Result<&'static str> {
        Err(unsupported(self, nulls.as_str()))
    }

    fn supports_select_into(&self) -> bool {
        false
    }

    fn supports_full_join(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompileError;

    #[test]
    fn test_mysql_dialect() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.name(), "mysql");
        assert_eq!(dialect.quote_identifier("users"), "`users`");
        assert_eq!(dialect.placeholder(1), "?");
        assert!(!dialect.supports_select_into());
        assert!(!dialect.supports_full_join());
    }

    #[test]
    fn test_mysql_limit_offset() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.limit_offset(Some(10), Some(20)), " LIMIT 20, 10");
        assert_eq!(dialect.limit_offset(Some(10), None), " LIMIT 10");
        assert_eq!(
            dialect.limit_offset(None, Some(5)),
            " LIMIT 5, 18446744073709551615"
        );
    }

    #[test]
    fn test_mysql_functions() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.function_name(Function::Ucase).unwrap(), "UCASE");
        assert_eq!(dialect.function_name(Function::Mid).unwrap(), "MID");
        assert_eq!(dialect.function_name(Function::Format).unwrap(), "FORMAT");
    }

    #[test]
    fn test_mysql_rejects_null_ordering() {
        let dialect = MySqlDialect::new();
        assert_eq!(
            dialect.null_ordering(NullOrdering::First).unwrap_err(),
            CompileError::unsupported("mysql", "NULLS FIRST")
        );
    }
}
