//! INSERT statement builder.
//!
//! The column order is fixed by [`InsertStatement::columns`] or by the keys
//! of the first row passed to [`InsertStatement::insert`]. Later rows are
//! laid out in that order: a missing column binds NULL and a key outside the
//! locked order is dropped with a warning. A key repeated within one row
//! keeps its last value.

use tracing::warn;

use crate::compiler::{Compile, Compiler};
use crate::error::{BuildError, Result};
use crate::statement::SqlStatement;
use crate::value::{IntoOperand, Operand, SqlValue};

use super::select::SelectStatement;

/// An INSERT statement builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InsertStatement {
    statement: SqlStatement,
}

impl InsertStatement {
    /// Creates a new INSERT builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the clause store.
    #[must_use]
    pub const fn statement(&self) -> &SqlStatement {
        &self.statement
    }

    /// Sets the target table.
    pub fn into_table(&mut self, table: &str) -> &mut Self {
        self.statement.set_into(table, None);
        self
    }

    /// Sets the target table inside `database`.
    pub fn into_database(&mut self, database: &str, table: &str) -> &mut Self {
        self.statement.set_into(table, Some(database.to_string()));
        self
    }

    /// Locks the column order explicitly, before any row is added.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ColumnsLocked`] once rows have been added,
    /// [`BuildError::EmptyColumns`] for an empty list and
    /// [`BuildError::DuplicateColumn`] when a column is named twice.
    pub fn columns(&mut self, columns: &[&str]) -> std::result::Result<&mut Self, BuildError> {
        if !self.statement.values.is_empty() {
            return Err(BuildError::ColumnsLocked);
        }
        if columns.is_empty() {
            return Err(BuildError::EmptyColumns);
        }
        let mut locked: Vec<String> = Vec::with_capacity(columns.len());
        for column in columns {
            if locked.iter().any(|c| c == column) {
                return Err(BuildError::DuplicateColumn {
                    column: (*column).to_string(),
                });
            }
            locked.push((*column).to_string());
        }
        self.statement.set_insert_columns(locked);
        Ok(self)
    }

    /// Returns the locked column order, if any row has been added.
    #[must_use]
    pub fn locked_columns(&self) -> Option<&[String]> {
        self.statement.insert_columns.as_deref()
    }

    /// Adds one row of `(column, value)` pairs.
    ///
    /// The first non-empty row locks in the column order from its keys.
    pub fn insert<I, K, V>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoOperand,
    {
        let mut pairs: Vec<(String, Operand)> = Vec::new();
        for (key, value) in row {
            let key = key.into();
            let value = value.into_operand();
            if let Some(slot) = pairs.iter_mut().find(|(k, _)| *k == key) {
                warn!(column = %key, "insert row repeats a column; keeping the last value");
                slot.1 = value;
            } else {
                pairs.push((key, value));
            }
        }
        if pairs.is_empty() {
            warn!("ignoring empty insert row");
            return self;
        }

        let columns = match &self.statement.insert_columns {
            Some(columns) => columns.clone(),
            None => {
                let columns: Vec<String> = pairs.iter().map(|(k, _)| k.clone()).collect();
                self.statement.set_insert_columns(columns.clone());
                columns
            }
        };

        let mut cells = vec![Operand::Value(SqlValue::Null); columns.len()];
        for (key, value) in pairs {
            match columns.iter().position(|c| *c == key) {
                Some(i) => cells[i] = value,
                None => warn!(
                    column = %key,
                    "dropping insert value for a column outside the locked column order"
                ),
            }
        }
        self.statement.add_values(cells);
        self
    }

    /// Adds several rows; see [`InsertStatement::insert`].
    pub fn insert_rows<R, I, K, V>(&mut self, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoOperand,
    {
        for row in rows {
            self.insert(row);
        }
        self
    }

    /// Inserts the result of a sub-select instead of VALUES rows.
    pub fn select(&mut self, f: impl FnOnce(&mut SelectStatement)) -> &mut Self {
        let mut select = SelectStatement::new();
        f(&mut select);
        self.statement.set_insert_source(select.into_statement());
        self
    }
}

impl Compile for InsertStatement {
    const KIND: &'static str = "INSERT";

    fn compile_with(&self, compiler: &mut Compiler<'_>) -> Result<String> {
        compiler.insert(&self.statement)
    }
}
