//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. The compiler
//! renders everything through the [`Dialect`] trait, so a dialect only
//! overrides the handful of primitives where its engine differs: identifier
//! quoting, placeholders, LIMIT/OFFSET, function names and a few
//! capability switches.

mod generic;
mod mysql;
mod postgres;
mod sqlite;

pub use generic::GenericDialect;
pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use crate::error::{CompileError, Result};
use crate::expression::Function;
use crate::statement::NullOrdering;

/// Default format used to bind date/time values.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes one identifier part, doubling embedded quote characters.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let escaped = name.replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{escaped}{quote}")
    }

    /// Returns the placeholder for the parameter at `position` (1-based).
    fn placeholder(&self, _position: usize) -> String {
        String::from("?")
    }

    /// Returns the `chrono` format used to bind date/time values.
    fn date_format(&self) -> &'static str {
        DEFAULT_DATE_FORMAT
    }

    /// Returns the keyword that marks an auto-incrementing column.
    fn autoincrement_keyword(&self) -> &'static str {
        "AUTO_INCREMENT"
    }

    /// Renders the LIMIT/OFFSET tail, including its leading space.
    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        let mut sql = String::new();
        if let Some(n) = limit {
            sql.push_str(&format!(" LIMIT {n}"));
        }
        if let Some(n) = offset {
            sql.push_str(&format!(" OFFSET {n}"));
        }
        sql
    }

    /// Returns the keyword of a well-known function.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Unsupported`] when the engine has no
    /// equivalent function.
    fn function_name(&self, function: Function) -> Result<&'static str> {
        Ok(function.standard_name())
    }

    /// Renders a well-known function call from its already rendered
    /// arguments.
    ///
    /// Arguments must be emitted in the order given: they may carry
    /// placeholders that are already bound.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Unsupported`] when the engine has no
    /// equivalent function.
    fn render_function(&self, function: Function, args: &[String]) -> Result<String> {
        render_call(self, function, args)
    }

    /// Renders a null ordering modifier.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Unsupported`] when the engine cannot order
    /// NULLs explicitly.
    fn null_ordering(&self, nulls: NullOrdering) -> Result<&'static str> {
        Ok(nulls.as_str())
    }

    /// Returns whether the dialect supports `SELECT ... INTO table`.
    fn supports_select_into(&self) -> bool {
        true
    }

    /// Returns whether the dialect supports FULL OUTER JOIN.
    fn supports_full_join(&self) -> bool {
        true
    }
}

/// Renders `function` as `NAME(args)` using the dialect's function name.
pub(crate) fn render_call<D: Dialect + ?Sized>(
    dialect: &D,
    function: Function,
    args: &[String],
) -> Result<String> {
    let name = dialect.function_name(function)?;
    let args = args.join(", ");
    Ok(match function {
        Function::CountDistinct => format!("{name}(DISTINCT {args})"),
        _ => format!("{name}({args})"),
    })
}

/// Builds the error for a construct `dialect` cannot render.
pub(crate) fn unsupported<D: Dialect + ?Sized>(dialect: &D, feature: &str) -> CompileError {
    CompileError::unsupported(dialect.name(), feature)
}
