//! Statement executor.
//!
//! Compiles statements with [`SqliteDialect`] and runs them on a pool.

use oxide_query_core::{Compile, SqlValue, SqliteDialect};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::FromRow;
use tracing::debug;

use crate::error::Result;

/// Binds every parameter, in order, to a sqlx query of any flavor.
macro_rules! bind_params {
    ($query:expr, $params:expr) => {{
        let mut query = $query;
        for param in $params {
            query = match param {
                SqlValue::Null => query.bind(Option::<i64>::None),
                SqlValue::Bool(b) => query.bind(b),
                SqlValue::Int(i) => query.bind(i),
                SqlValue::Float(f) => query.bind(f),
                SqlValue::Text(s) => query.bind(s),
                SqlValue::Blob(b) => query.bind(b),
                SqlValue::Timestamp(ts) => query.bind(ts),
            };
        }
        query
    }};
}

/// Runs compiled statements against a SQLite pool.
#[derive(Debug, Clone)]
pub struct Executor {
    pool: SqlitePool,
    dialect: SqliteDialect,
}

impl Executor {
    /// Creates an executor over an existing pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            dialect: SqliteDialect::new(),
        }
    }

    /// Opens a pool for `url` (e.g. `sqlite::memory:` or `sqlite://app.db`).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(url).await?;
        Ok(Self::new(pool))
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn prepare<C: Compile>(&self, statement: &C) -> Result<(String, Vec<SqlValue>)> {
        let (sql, params) = statement.to_sql(&self.dialect)?;
        debug!(sql = %sql, params = params.len(), "Executing SQL");
        Ok((sql, params))
    }

    /// Runs a statement and returns every row.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement does not compile or the query fails.
    pub async fn fetch_all<C: Compile>(&self, statement: &C) -> Result<Vec<SqliteRow>> {
        let (sql, params) = self.prepare(statement)?;
        let query = bind_params!(sqlx::query(&sql), params);
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Runs a statement and returns the first row, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement does not compile or the query fails.
    pub async fn fetch_optional<C: Compile>(&self, statement: &C) -> Result<Option<SqliteRow>> {
        let (sql, params) = self.prepare(statement)?;
        let query = bind_params!(sqlx::query(&sql), params);
        Ok(query.fetch_optional(&self.pool).await?)
    }

    /// Runs a statement and maps every row with [`FromRow`].
    ///
    /// # Errors
    ///
    /// Returns an error if the statement does not compile, the query fails
    /// or a row does not map to `T`.
    pub async fn fetch_as<T, C>(&self, statement: &C) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
        C: Compile,
    {
        let (sql, params) = self.prepare(statement)?;
        let query = bind_params!(sqlx::query_as::<_, T>(&sql), params);
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Runs a statement and returns the first column of the first row.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement does not compile, the query fails
    /// or returns no row.
    pub async fn scalar<T, C>(&self, statement: &C) -> Result<T>
    where
        T: Send + Unpin,
        (T,): for<'r> FromRow<'r, SqliteRow>,
        C: Compile,
    {
        let (sql, params) = self.prepare(statement)?;
        let query = bind_params!(sqlx::query_scalar::<_, T>(&sql), params);
        Ok(query.fetch_one(&self.pool).await?)
    }

    /// Runs a statement and returns the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement does not compile or the query fails.
    pub async fn execute<C: Compile>(&self, statement: &C) -> Result<u64> {
        let (sql, params) = self.prepare(statement)?;
        let query = bind_params!(sqlx::query(&sql), params);
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Runs an INSERT and returns the rowid of the last inserted row.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement does not compile or the query fails.
    pub async fn insert<C: Compile>(&self, statement: &C) -> Result<i64> {
        let (sql, params) = self.prepare(statement)?;
        let query = bind_params!(sqlx::query(&sql), params);
        let result = query.execute(&self.pool).await?;
        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use oxide_query_core::prelude::*;
    use oxide_query_core::{CompileError, ToSqlValue};
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::Row;

    use super::*;
    use crate::error::ExecError;

    async fn create_test_executor() -> Executor {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory SQLite pool");
        sqlx::query(
            "CREATE TABLE users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER,
                active BOOLEAN NOT NULL DEFAULT 1,
                created_at TEXT
            )",
        )
        .execute(&pool)
        .await
        .expect("Failed to create users table");
        Executor::new(pool)
    }

    async fn seed(executor: &Executor) {
        let mut insert = Query::insert();
        insert
            .into_table("users")
            .insert([("name", "Ann".to_sql_value()), ("age", 30_i32.to_sql_value())])
            .insert([("name", "Bob".to_sql_value()), ("age", 17_i32.to_sql_value())])
            .insert([("name", "Cid".to_sql_value())]);
        assert_eq!(executor.execute(&insert).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let executor = create_test_executor().await;
        seed(&executor).await;

        let mut select = Query::select();
        select
            .columns(&["id", "name"])
            .from("users")
            .where_("age")
            .greater_than(18)
            .order_by(&["id"], OrderDirection::Asc, None);

        let rows: Vec<(i64, String)> = executor.fetch_as(&select).await.unwrap();
        assert_eq!(rows, vec![(1, String::from("Ann"))]);
    }

    #[tokio::test]
    async fn test_missing_cells_are_null() {
        let executor = create_test_executor().await;
        seed(&executor).await;

        let mut select = Query::select();
        select.from("users").where_("age").is_null();
        let row = executor.fetch_optional(&select).await.unwrap().unwrap();
        assert_eq!(row.get::<String, _>("name"), "Cid");
    }

    #[tokio::test]
    async fn test_scalar_count() {
        let executor = create_test_executor().await;
        seed(&executor).await;

        let mut select = Query::select();
        select.from("users").count("*");
        let total: i64 = executor.scalar(&select).await.unwrap();
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_rows_affected() {
        let executor = create_test_executor().await;
        seed(&executor).await;

        let mut update = Query::update("users");
        update.increment("age", 1).where_("age").not_null();
        assert_eq!(executor.execute(&update).await.unwrap(), 2);

        let mut delete = Query::delete();
        delete.from("users").where_("name").in_list(["Bob", "Cid"]).unwrap();
        assert_eq!(executor.execute(&delete).await.unwrap(), 2);

        let mut select = Query::select();
        select.from("users").column("age");
        let age: i64 = executor.scalar(&select).await.unwrap();
        assert_eq!(age, 31);
    }

    #[tokio::test]
    async fn test_timestamp_binding_and_rowid() {
        let executor = create_test_executor().await;
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();

        let mut insert = Query::insert();
        insert
            .into_table("users")
            .insert([("name", "Dee".to_sql_value()), ("created_at", ts.to_sql_value())]);
        assert_eq!(executor.insert(&insert).await.unwrap(), 1);

        let mut select = Query::select();
        select
            .column("created_at")
            .from("users")
            .where_("created_at")
            .at_least(ts);
        let stored: String = executor.scalar(&select).await.unwrap();
        assert_eq!(stored, "2024-01-02 03:04:05");
    }

    #[tokio::test]
    async fn test_exists_subquery() {
        let executor = create_test_executor().await;
        seed(&executor).await;
        sqlx::query("CREATE TABLE bans (user_id INTEGER NOT NULL)")
            .execute(executor.pool())
            .await
            .unwrap();
        sqlx::query("INSERT INTO bans (user_id) VALUES (2)")
            .execute(executor.pool())
            .await
            .unwrap();

        let mut select = Query::select();
        select
            .column("name")
            .from("users")
            .where_not_exists(|q| {
                q.from("bans").where_("bans.user_id").is(col("users.id"));
            })
            .order_by(&["name"], OrderDirection::Asc, None);

        let names: Vec<(String,)> = executor.fetch_as(&select).await.unwrap();
        assert_eq!(
            names,
            vec![(String::from("Ann"),), (String::from("Cid"),)]
        );
    }

    #[tokio::test]
    async fn test_compile_errors_are_reported() {
        let executor = create_test_executor().await;

        let mut select = Query::select();
        select.from("users").into_table("users_copy");
        let err = executor.fetch_all(&select).await.err().expect("expected an error");
        assert!(matches!(
            err,
            ExecError::Compile(CompileError::Unsupported { dialect: "sqlite", .. })
        ));
    }

    #[tokio::test]
    async fn test_database_errors_are_reported() {
        let executor = create_test_executor().await;

        let mut select = Query::select();
        select.from("missing_table");
        let err = executor.fetch_all(&select).await.err().expect("expected an error");
        assert!(matches!(err, ExecError::Database(_)));
    }
}
