//! Statement compiler.
//!
//! [`Compiler`] walks a statement depth-first and emits SQL text for the
//! active [`Dialect`]. Every bound value goes through one choke point,
//! [`Compiler::param`], which appends it to the parameter list and returns
//! the placeholder; fragments are rendered strictly left to right, so the
//! N-th placeholder in the text always matches the N-th parameter.
//!
//! ```rust
//! use oxide_query_core::{Compile, Compiler, Filterable, PostgresDialect, Query};
//!
//! let mut select = Query::select();
//! select.from("users").where_("id").is(1).or_where("id").is(2);
//!
//! let dialect = PostgresDialect::new();
//! let (sql, params) = Compiler::new(&dialect).compile(&select).unwrap();
//! assert_eq!(sql, "SELECT * FROM \"users\" WHERE \"id\" = $1 OR \"id\" = $2");
//! assert_eq!(params.len(), 2);
//! ```

use std::fmt::Write;
use std::mem;

use tracing::{debug, trace};

use crate::dialect::{unsupported, Dialect};
use crate::error::{CompileError, Result};
use crate::expression::{Expression, Node};
use crate::statement::{
    Clause, Condition, IntoTarget, Join, JoinType, OrderBy, SelectColumn, SqlStatement, TableRef,
};
use crate::value::{Operand, SqlValue};

/// Statements that can be compiled to SQL.
pub trait Compile {
    /// Statement kind, used in logs.
    const KIND: &'static str;

    /// Renders the statement with `compiler`, binding values as it goes.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] when the statement is incomplete or uses a
    /// construct the dialect cannot render.
    fn compile_with(&self, compiler: &mut Compiler<'_>) -> Result<String>;

    /// Compiles the statement with a fresh compiler for `dialect`.
    ///
    /// # Errors
    ///
    /// See [`Compile::compile_with`].
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<(String, Vec<SqlValue>)>
    where
        Self: Sized,
    {
        Compiler::new(dialect).compile(self)
    }
}

/// A dialect-aware SQL compiler.
///
/// The parameter list is reset at the start of every [`Compiler::compile`]
/// call; a compiler can be reused for any number of statements, one at a
/// time.
pub struct Compiler<'d> {
    dialect: &'d dyn Dialect,
    date_format: String,
    params: Vec<SqlValue>,
}

impl<'d> Compiler<'d> {
    /// Creates a compiler for `dialect`, using the dialect's date format.
    #[must_use]
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        Self {
            dialect,
            date_format: dialect.date_format().to_string(),
            params: Vec::new(),
        }
    }

    /// Overrides the `chrono` format used to bind date/time values.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Returns the dialect.
    #[must_use]
    pub fn dialect(&self) -> &'d dyn Dialect {
        self.dialect
    }

    /// Returns the date format used to bind date/time values.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Compiles `statement`, returning the SQL text and its parameters.
    ///
    /// # Errors
    ///
    /// See [`Compile::compile_with`].
    pub fn compile<C: Compile>(&mut self, statement: &C) -> Result<(String, Vec<SqlValue>)> {
        self.params.clear();
        let sql = statement.compile_with(self)?;
        let params = mem::take(&mut self.params);
        debug!(
            dialect = self.dialect.name(),
            statement = C::KIND,
            params = params.len(),
            "compiled statement"
        );
        trace!(%sql, "emitted sql");
        Ok((sql, params))
    }

    /// Binds `value` and returns its placeholder.
    ///
    /// Date/time values are formatted to text with the compiler's date
    /// format.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::InvalidDateFormat`] when a date/time value
    /// cannot be rendered with the date format.
    pub fn param(&mut self, value: &SqlValue) -> Result<String> {
        let bound = match value {
            SqlValue::Timestamp(ts) => {
                let mut text = String::new();
                write!(text, "{}", ts.format(&self.date_format)).map_err(|_| {
                    CompileError::InvalidDateFormat {
                        format: self.date_format.clone(),
                    }
                })?;
                SqlValue::Text(text)
            }
            other => other.clone(),
        };
        self.params.push(bound);
        Ok(self.dialect.placeholder(self.params.len()))
    }

    /// Quotes a possibly dotted identifier; `*` stays bare.
    #[must_use]
    pub fn wrap(&self, name: &str) -> String {
        name.split('.')
            .map(|part| {
                if part == "*" {
                    part.to_string()
                } else {
                    self.dialect.quote_identifier(part)
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Renders an expression; nodes are separated by one space.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Unsupported`] for functions the dialect
    /// cannot render.
    pub fn expression(&mut self, expr: &Expression) -> Result<String> {
        let mut parts = Vec::with_capacity(expr.nodes().len());
        for node in expr.nodes() {
            parts.push(self.node(node)?);
        }
        Ok(parts.join(" "))
    }

    fn node(&mut self, node: &Node) -> Result<String> {
        Ok(match node {
            Node::Column(name) => self.wrap(name),
            Node::Op(token) => token.clone(),
            Node::Value(value) => self.param(value)?,
            Node::Group(inner) => format!("({})", self.expression(inner)?),
            Node::Function { function, args } => {
                let args = self.arguments(args)?;
                self.dialect.render_function(*function, &args)?
            }
            Node::Call { name, args } => {
                let args = self.arguments(args)?;
                format!("{name}({})", args.join(", "))
            }
            Node::Subquery(statement) => format!("({})", self.select(statement)?),
        })
    }

    fn arguments(&mut self, args: &[Expression]) -> Result<Vec<String>> {
        args.iter().map(|arg| self.expression(arg)).collect()
    }

    fn operand(&mut self, operand: &Operand) -> Result<String> {
        Ok(match operand {
            Operand::Value(value) => self.param(value)?,
            Operand::Column(name) => self.wrap(name),
            Operand::Expression(expr) => self.expression(expr)?,
        })
    }

    fn operands(&mut self, operands: &[Operand]) -> Result<String> {
        let mut parts = Vec::with_capacity(operands.len());
        for operand in operands {
            parts.push(self.operand(operand)?);
        }
        Ok(parts.join(", "))
    }

    /// Renders a clause list. The first clause's separator is never
    /// emitted.
    fn conditions(&mut self, clauses: &[Clause]) -> Result<String> {
        let mut sql = String::new();
        for (i, clause) in clauses.iter().enumerate() {
            let condition = self.condition(&clause.condition)?;
            if i > 0 {
                sql.push(' ');
                sql.push_str(clause.separator.as_str());
                sql.push(' ');
            }
            sql.push_str(&condition);
        }
        Ok(sql)
    }

    fn condition(&mut self, condition: &Condition) -> Result<String> {
        Ok(match condition {
            Condition::Compare {
                column,
                operator,
                operand,
            } => {
                let left = self.expression(column)?;
                let right = self.operand(operand)?;
                format!("{left} {} {right}", operator.as_str())
            }
            Condition::Between {
                column,
                low,
                high,
                not,
            } => {
                let left = self.expression(column)?;
                let low = self.operand(low)?;
                let high = self.operand(high)?;
                format!("{left} {}BETWEEN {low} AND {high}", negation(*not))
            }
            Condition::Like {
                column,
                pattern,
                not,
            } => {
                let left = self.expression(column)?;
                let pattern = self.operand(pattern)?;
                format!("{left} {}LIKE {pattern}", negation(*not))
            }
            Condition::In {
                column,
                values,
                not,
            } => {
                let left = self.expression(column)?;
                let values = self.operands(values)?;
                format!("{left} {}IN ({values})", negation(*not))
            }
            Condition::InSelect { column, query, not } => {
                let left = self.expression(column)?;
                let query = self.select(query)?;
                format!("{left} {}IN ({query})", negation(*not))
            }
            Condition::Null { column, not } => {
                let left = self.expression(column)?;
                if *not {
                    format!("{left} IS NOT NULL")
                } else {
                    format!("{left} IS NULL")
                }
            }
            Condition::Exists { query, not } => {
                let query = self.select(query)?;
                format!("{}EXISTS ({query})", negation(*not))
            }
            Condition::Nested(clauses) => format!("({})", self.conditions(clauses)?),
            Condition::Nop(expr) => self.expression(expr)?,
        })
    }

    fn wheres(&mut self, clauses: &[Clause]) -> Result<String> {
        if clauses.is_empty() {
            return Ok(String::new());
        }
        Ok(format!(" WHERE {}", self.conditions(clauses)?))
    }

    fn table(&self, table: &TableRef) -> String {
        match &table.alias {
            Some(alias) => format!(
                "{} AS {}",
                self.wrap(&table.name),
                self.dialect.quote_identifier(alias)
            ),
            None => self.wrap(&table.name),
        }
    }

    fn tables(&self, tables: &[TableRef]) -> String {
        tables
            .iter()
            .map(|t| self.table(t))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn target(&self, target: &IntoTarget) -> String {
        let table = self.wrap(&target.table);
        match &target.database {
            Some(database) => format!("{}.{table}", self.dialect.quote_identifier(database)),
            None => table,
        }
    }

    fn joins(&mut self, joins: &[Join]) -> Result<String> {
        let mut sql = String::new();
        for join in joins {
            if join.kind == JoinType::Full && !self.dialect.supports_full_join() {
                return Err(unsupported(self.dialect, "FULL JOIN"));
            }
            sql.push(' ');
            sql.push_str(join.kind.as_str());
            sql.push(' ');
            sql.push_str(&self.table(&join.table));
            if !join.conditions.is_empty() {
                sql.push_str(" ON ");
                sql.push_str(&self.conditions(&join.conditions)?);
            }
        }
        Ok(sql)
    }

    fn select_list(&mut self, columns: &[SelectColumn]) -> Result<String> {
        if columns.is_empty() {
            return Ok(String::from("*"));
        }
        let mut parts = Vec::with_capacity(columns.len());
        for column in columns {
            let expr = self.expression(&column.expr)?;
            parts.push(match &column.alias {
                Some(alias) => format!("{expr} AS {}", self.dialect.quote_identifier(alias)),
                None => expr,
            });
        }
        Ok(parts.join(", "))
    }

    fn order(&mut self, order: &[OrderBy]) -> Result<String> {
        let mut parts = Vec::new();
        for entry in order {
            let nulls = match entry.nulls {
                Some(nulls) => format!(" {}", self.dialect.null_ordering(nulls)?),
                None => String::new(),
            };
            for column in &entry.columns {
                let expr = self.expression(column)?;
                parts.push(format!("{expr} {}{nulls}", entry.direction.as_str()));
            }
        }
        Ok(parts.join(", "))
    }

    /// Renders a SELECT.
    ///
    /// Fragment order: list, INTO, FROM, JOIN, WHERE, GROUP BY, HAVING,
    /// ORDER BY, LIMIT/OFFSET.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Unsupported`] for SELECT INTO, FULL JOIN,
    /// null ordering or functions the dialect cannot render.
    pub fn select(&mut self, statement: &SqlStatement) -> Result<String> {
        let mut sql = String::from("SELECT ");
        if statement.distinct {
            sql.push_str("DISTINCT ");
        }
        let columns = self.select_list(&statement.columns)?;
        sql.push_str(&columns);

        if let Some(into) = &statement.into {
            if !self.dialect.supports_select_into() {
                return Err(unsupported(self.dialect, "SELECT ... INTO"));
            }
            sql.push_str(" INTO ");
            sql.push_str(&self.target(into));
        }

        if !statement.tables.is_empty() {
            sql.push_str(" FROM ");
            sql.push_str(&self.tables(&statement.tables));
        }

        let joins = self.joins(&statement.joins)?;
        sql.push_str(&joins);
        let wheres = self.wheres(&statement.wheres)?;
        sql.push_str(&wheres);

        if !statement.group.is_empty() {
            let mut group = Vec::with_capacity(statement.group.len());
            for expr in &statement.group {
                group.push(self.expression(expr)?);
            }
            sql.push_str(" GROUP BY ");
            sql.push_str(&group.join(", "));
        }

        if !statement.having.is_empty() {
            let having = self.conditions(&statement.having)?;
            sql.push_str(" HAVING ");
            sql.push_str(&having);
        }

        if !statement.order.is_empty() {
            let order = self.order(&statement.order)?;
            sql.push_str(" ORDER BY ");
            sql.push_str(&order);
        }

        sql.push_str(&self.dialect.limit_offset(statement.limit, statement.offset));
        Ok(sql)
    }

    /// Renders an INSERT.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::MissingTable`] without a target table and
    /// [`CompileError::EmptyInsert`] without rows or a source query.
    pub fn insert(&mut self, statement: &SqlStatement) -> Result<String> {
        let into = statement
            .into
            .as_ref()
            .ok_or(CompileError::MissingTable { statement: "INSERT" })?;
        let mut sql = format!("INSERT INTO {}", self.target(into));

        if let Some(columns) = &statement.insert_columns {
            if !columns.is_empty() {
                let columns: Vec<String> = columns.iter().map(|c| self.wrap(c)).collect();
                sql.push_str(&format!(" ({})", columns.join(", ")));
            }
        }

        if let Some(source) = &statement.insert_source {
            let source = self.select(source)?;
            sql.push(' ');
            sql.push_str(&source);
            return Ok(sql);
        }

        if statement.values.is_empty() || statement.values.iter().any(Vec::is_empty) {
            return Err(CompileError::EmptyInsert);
        }
        let mut rows = Vec::with_capacity(statement.values.len());
        for row in &statement.values {
            rows.push(format!("({})", self.operands(row)?));
        }
        sql.push_str(" VALUES ");
        sql.push_str(&rows.join(", "));
        Ok(sql)
    }

    /// Renders an UPDATE. SET values are bound before WHERE values.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::MissingTable`] without a table and
    /// [`CompileError::EmptyUpdate`] without assignments.
    pub fn update(&mut self, statement: &SqlStatement) -> Result<String> {
        if statement.tables.is_empty() {
            return Err(CompileError::MissingTable { statement: "UPDATE" });
        }
        if statement.assignments.is_empty() {
            return Err(CompileError::EmptyUpdate);
        }

        let mut sql = format!("UPDATE {}", self.tables(&statement.tables));
        let mut sets = Vec::with_capacity(statement.assignments.len());
        for assignment in &statement.assignments {
            let column = self.wrap(&assignment.column);
            let value = self.operand(&assignment.value)?;
            sets.push(format!("{column} = {value}"));
        }
        sql.push_str(" SET ");
        sql.push_str(&sets.join(", "));

        let wheres = self.wheres(&statement.wheres)?;
        sql.push_str(&wheres);
        Ok(sql)
    }

    /// Renders a DELETE.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::MissingTable`] without a FROM table.
    pub fn delete(&mut self, statement: &SqlStatement) -> Result<String> {
        if statement.tables.is_empty() {
            return Err(CompileError::MissingTable { statement: "DELETE" });
        }

        let mut sql = String::from("DELETE ");
        if !statement.delete_targets.is_empty() {
            let targets: Vec<String> = statement
                .delete_targets
                .iter()
                .map(|t| self.wrap(t))
                .collect();
            sql.push_str(&targets.join(", "));
            sql.push(' ');
        }
        sql.push_str("FROM ");
        sql.push_str(&self.tables(&statement.tables));

        let joins = self.joins(&statement.joins)?;
        sql.push_str(&joins);
        let wheres = self.wheres(&statement.wheres)?;
        sql.push_str(&wheres);
        Ok(sql)
    }
}

const fn negation(not: bool) -> &'static str {
    if not { "NOT " } else { "" }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::builder::{Filterable, HavingFilterable, Joinable, Query, SelectStatement};
    use crate::dialect::{GenericDialect, MySqlDialect, PostgresDialect, SqliteDialect};
    use crate::statement::NullOrdering;
    use crate::statement::OrderDirection;

    #[test]
    fn test_postgres_numbers_placeholders_across_subqueries() {
        let mut select = Query::select();
        select
            .from("users")
            .where_("age")
            .greater_than(18)
            .and_where("id")
            .in_select(|q| {
                q.column("user_id")
                    .from("orders")
                    .where_("total")
                    .at_least(100);
            })
            .or_where_group(|g| {
                g.where_("vip").is(true).and_where("region").is("eu");
            });

        let (sql, params) = select.to_sql(&PostgresDialect::new()).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM \"users\" WHERE \"age\" > $1 AND \"id\" IN \
             (SELECT \"user_id\" FROM \"orders\" WHERE \"total\" >= $2) \
             OR (\"vip\" = $3 AND \"region\" = $4)"
        );
        assert_eq!(
            params,
            vec![
                SqlValue::Int(18),
                SqlValue::Int(100),
                SqlValue::Bool(true),
                SqlValue::Text(String::from("eu")),
            ]
        );
    }

    #[test]
    fn test_timestamp_is_bound_as_text() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let mut select = Query::select();
        select.from("events").where_("created_at").at_least(ts);

        let dialect = GenericDialect::new();
        let (_, params) = select.to_sql(&dialect).unwrap();
        assert_eq!(params, vec![SqlValue::Text(String::from("2024-01-02 03:04:05"))]);

        let (_, params) = Compiler::new(&dialect)
            .with_date_format("%d/%m/%Y")
            .compile(&select)
            .unwrap();
        assert_eq!(params, vec![SqlValue::Text(String::from("02/01/2024"))]);
    }

    #[test]
    fn test_invalid_date_format_is_an_error() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let mut select = Query::select();
        select.from("events").where_("created_at").at_least(ts);

        let dialect = GenericDialect::new();
        for format in ["%Y-%!", "%Y %z"] {
            let err = Compiler::new(&dialect)
                .with_date_format(format)
                .compile(&select)
                .unwrap_err();
            assert_eq!(
                err,
                CompileError::InvalidDateFormat {
                    format: String::from(format)
                }
            );
        }

        // Values other than date/time never touch the format.
        let mut plain = Query::select();
        plain.from("events").where_("id").is(1);
        assert!(Compiler::new(&dialect)
            .with_date_format("%Y-%!")
            .compile(&plain)
            .is_ok());
    }

    #[test]
    fn test_recompile_is_idempotent() {
        let mut select = Query::select();
        select.from("users").where_("id").is(1);

        let dialect = GenericDialect::new();
        let mut compiler = Compiler::new(&dialect);
        let first = compiler.compile(&select).unwrap();
        let second = compiler.compile(&select).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.1.len(), 1);
    }

    #[test]
    fn test_first_separator_is_suppressed() {
        let mut select = Query::select();
        select.from("t").or_where("a").is(1).or_where("b").is(2);
        let (sql, _) = select.to_sql(&GenericDialect::new()).unwrap();
        assert_eq!(sql, "SELECT * FROM \"t\" WHERE \"a\" = ? OR \"b\" = ?");
    }

    #[test]
    fn test_negated_conditions() {
        let mut select = Query::select();
        select
            .from("t")
            .where_("a")
            .not_between(1, 5)
            .where_("b")
            .not_like("x%")
            .where_("c")
            .not_null()
            .where_not_exists(|q| {
                q.from("u");
            });
        select.where_("d").not_in_list(["p", "q"]).unwrap();

        let (sql, params) = select.to_sql(&GenericDialect::new()).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM \"t\" WHERE \"a\" NOT BETWEEN ? AND ? AND \"b\" NOT LIKE ? \
             AND \"c\" IS NOT NULL AND NOT EXISTS (SELECT * FROM \"u\") AND \"d\" NOT IN (?, ?)"
        );
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_expression_nodes() {
        let mut select = SelectStatement::new();
        select
            .column_expr(
                |e| {
                    e.group(|g| {
                        g.column("price").op("*").value(2);
                    })
                    .op("+")
                    .call("COALESCE", vec![crate::col("fee"), Operand::Value(SqlValue::Int(0))]);
                },
                Some("cost"),
            )
            .from("items")
            .where_expr(|e| {
                e.column("flags").op("&").value(4);
            })
            .nop();

        let (sql, params) = select.to_sql(&GenericDialect::new()).unwrap();
        assert_eq!(
            sql,
            "SELECT (\"price\" * ?) + COALESCE(\"fee\", ?) AS \"cost\" FROM \"items\" \
             WHERE \"flags\" & ?"
        );
        assert_eq!(
            params,
            vec![SqlValue::Int(2), SqlValue::Int(0), SqlValue::Int(4)]
        );
    }

    #[test]
    fn test_dialect_functions() {
        let mut select = SelectStatement::new();
        select
            .column_expr(
                |e| {
                    e.ucase("name");
                },
                None,
            )
            .column_expr(
                |e| {
                    e.mid("name", 1, 3);
                },
                None,
            )
            .column_expr(
                |e| {
                    e.now();
                },
                None,
            )
            .from("users");

        let (sql, _) = select.to_sql(&MySqlDialect::new()).unwrap();
        assert_eq!(sql, "SELECT UCASE(`name`), MID(`name`, ?, ?), NOW() FROM `users`");

        let (sql, _) = select.to_sql(&SqliteDialect::new()).unwrap();
        assert_eq!(
            sql,
            "SELECT UPPER(\"name\"), SUBSTR(\"name\", ?, ?), DATETIME('now') FROM \"users\""
        );
    }

    #[test]
    fn test_format_is_unsupported_on_postgres() {
        let mut select = SelectStatement::new();
        select
            .column_expr(
                |e| {
                    e.format("price", 2);
                },
                None,
            )
            .from("items");

        assert_eq!(
            select.to_sql(&PostgresDialect::new()).unwrap_err(),
            CompileError::unsupported("postgresql", "FORMAT()")
        );
        let (sql, _) = select.to_sql(&MySqlDialect::new()).unwrap();
        assert_eq!(sql, "SELECT FORMAT(`price`, ?) FROM `items`");
    }

    #[test]
    fn test_dialect_capabilities() {
        let mut full = SelectStatement::new();
        full.from("a").join(JoinType::Full, "b", |j| {
            j.on("a.id", crate::statement::Operator::Eq, "b.id");
        });
        assert_eq!(
            full.to_sql(&MySqlDialect::new()).unwrap_err(),
            CompileError::unsupported("mysql", "FULL JOIN")
        );
        assert!(full.to_sql(&PostgresDialect::new()).is_ok());

        let mut ordered = SelectStatement::new();
        ordered
            .from("a")
            .order_by(&["b"], OrderDirection::Asc, Some(NullOrdering::First));
        assert_eq!(
            ordered.to_sql(&MySqlDialect::new()).unwrap_err(),
            CompileError::unsupported("mysql", "NULLS FIRST")
        );
    }

    #[test]
    fn test_having_renders_before_order_by() {
        let mut select = SelectStatement::new();
        select
            .column("dept")
            .from("staff")
            .group_by(&["dept"])
            .having_expr(|e| {
                e.avg("salary");
            })
            .between(1000, 2000)
            .order_by(&["dept"], OrderDirection::Asc, None)
            .limit(5);

        let (sql, params) = select.to_sql(&SqliteDialect::new()).unwrap();
        assert_eq!(
            sql,
            "SELECT \"dept\" FROM \"staff\" GROUP BY \"dept\" \
             HAVING AVG(\"salary\") BETWEEN ? AND ? ORDER BY \"dept\" ASC LIMIT 5"
        );
        assert_eq!(params, vec![SqlValue::Int(1000), SqlValue::Int(2000)]);
    }

    #[test]
    fn test_wrap() {
        let dialect = GenericDialect::new();
        let compiler = Compiler::new(&dialect);
        assert_eq!(compiler.wrap("users.*"), "\"users\".*");
        assert_eq!(compiler.wrap("public.users.id"), "\"public\".\"users\".\"id\"");
    }
}
