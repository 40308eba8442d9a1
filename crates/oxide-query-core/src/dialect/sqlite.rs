//! SQLite dialect.

use super::{render_call, unsupported, Dialect};
use crate::error::Result;
use crate::expression::Function;

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn autoincrement_keyword(&self) -> &'static str {
        "AUTOINCREMENT"
    }

    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        match (limit, offset) {
            // OFFSET is only valid after LIMIT; -1 means unbounded.
            (None, Some(o)) => format!(" LIMIT -1 OFFSET {o}"),
            (Some(n), Some(o)) => format!(" LIMIT {n} OFFSET {o}"),
            (Some(n), None) => format!(" LIMIT {n}"),
            (None, None) => String::new(),
        }
    }

    fn function_name(&self, function: Function) -> Result<&'static str> {
        match function {
            Function::Mid => Ok("SUBSTR"),
            Function::Format => Err(unsupported(self, "FORMAT()")),
            other => Ok(other.standard_name()),
        }
    }

    fn render_function(&self, function: Function, args: &[String]) -> Result<String> {
        match function {
            Function::Now => Ok(String::from("DATETIME('now')")),
            other => render_call(self, other, args),
        }
    }

    fn supports_select_into(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_dialect() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.name(), "sqlite");
        assert_eq!(dialect.identifier_quote(), '"');
        assert_eq!(dialect.placeholder(2), "?");
        assert_eq!(dialect.autoincrement_keyword(), "AUTOINCREMENT");
        assert!(!dialect.supports_select_into());
        assert!(dialect.supports_full_join());
    }

    #[test]
    fn test_sqlite_limit_offset() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.limit_offset(None, Some(5)), " LIMIT -1 OFFSET 5");
        assert_eq!(dialect.limit_offset(Some(3), Some(5)), " LIMIT 3 OFFSET 5");
    }

    #[test]
    fn test_sqlite_functions() {
        let dialect = SqliteDialect::new();
        assert_eq!(
            dialect.render_function(Function::Now, &[]).unwrap(),
            "DATETIME('now')"
        );
        assert_eq!(
            dialect
                .render_function(
                    Function::Mid,
                    &[String::from("\"name\""), String::from("?"), String::from("?")]
                )
                .unwrap(),
            "SUBSTR(\"name\", ?, ?)"
        );
        assert_eq!(
            dialect
                .render_function(Function::CountDistinct, &[String::from("\"id\"")])
                .unwrap(),
            "COUNT(DISTINCT \"id\")"
        );
        assert!(dialect.function_name(Function::Format).is_err());
    }
}
