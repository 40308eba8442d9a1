#![allow(dead_code)]

use oxide_query_core::{
    Compile, Dialect, GenericDialect, MySqlDialect, PostgresDialect, SqlValue, SqliteDialect,
};

pub fn compile<C: Compile>(statement: &C, dialect: &dyn Dialect) -> (String, Vec<SqlValue>) {
    statement
        .to_sql(dialect)
        .unwrap_or_else(|e| panic!("Failed to compile for {}: {e}", dialect.name()))
}

pub fn generic<C: Compile>(statement: &C) -> (String, Vec<SqlValue>) {
    compile(statement, &GenericDialect::new())
}

pub fn postgres<C: Compile>(statement: &C) -> (String, Vec<SqlValue>) {
    compile(statement, &PostgresDialect::new())
}

pub fn all_dialects() -> Vec<Box<dyn Dialect>> {
    vec![
        Box::new(GenericDialect::new()),
        Box::new(MySqlDialect::new()),
        Box::new(PostgresDialect::new()),
        Box::new(SqliteDialect::new()),
    ]
}

pub fn text(s: &str) -> SqlValue {
    SqlValue::Text(s.to_string())
}

/// Returns the `$n` placeholder numbers in the order they appear.
pub fn numbered_placeholders(sql: &str) -> Vec<usize> {
    let mut numbers = Vec::new();
    let mut chars = sql.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            continue;
        }
        let mut digits = String::new();
        while let Some(d) = chars.peek().filter(|d| d.is_ascii_digit()) {
            digits.push(*d);
            chars.next();
        }
        numbers.push(
            digits
                .parse()
                .unwrap_or_else(|_| panic!("Bad placeholder in: {sql}")),
        );
    }
    numbers
}

/// Asserts that `$1..$n` appear left to right, one per parameter.
pub fn assert_aligned(sql: &str, params: &[SqlValue]) {
    let numbers = numbered_placeholders(sql);
    let expected: Vec<usize> = (1..=params.len()).collect();
    assert_eq!(
        numbers, expected,
        "Placeholders out of step with {} params in: {sql}",
        params.len()
    );
}
