use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Postgres, QueryBuilder, Sqlite};
use tokio::sync::Mutex;
use tracing::debug;

use crate::abstract_trait::EngineAdapterTrait;
use crate::errors::ExecError;
use crate::model::Value;

#[derive(Clone)]
enum WirePool {
    Postgres(Pool<Postgres>),
    Sqlite(Pool<Sqlite>),
}

/// sqlx-backed adapter for engines speaking a protocol sqlx drives natively.
/// The pool is built on first use so readiness probing can retry the
/// connection itself.
pub struct WireAdapter {
    url: String,
    pool: Mutex<Option<WirePool>>,
}

impl WireAdapter {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool: Mutex::new(None),
        }
    }

    async fn pool(&self) -> Result<WirePool, ExecError> {
        let mut slot = self.pool.lock().await;
        if let Some(pool) = slot.as_ref() {
            return Ok(pool.clone());
        }

        let pool = if self.url.starts_with("sqlite:") {
            WirePool::Sqlite(
                SqlitePoolOptions::new()
                    .max_connections(5)
                    .connect(&self.url)
                    .await?,
            )
        } else if self.url.starts_with("postgres") {
            WirePool::Postgres(
                PgPoolOptions::new()
                    .max_connections(5)
                    .connect(&self.url)
                    .await?,
            )
        } else {
            return Err(ExecError::UnsupportedUrl(self.url.clone()));
        };

        debug!("connected to {}", self.url);
        *slot = Some(pool.clone());
        Ok(pool)
    }
}

#[async_trait]
impl EngineAdapterTrait for WireAdapter {
    async fn execute(&self, statement: &str) -> Result<(), ExecError> {
        match self.pool().await? {
            WirePool::Postgres(pool) => {
                sqlx::query(statement).execute(&pool).await?;
            }
            WirePool::Sqlite(pool) => {
                sqlx::query(statement).execute(&pool).await?;
            }
        }
        Ok(())
    }

    async fn insert_batch(
        &self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<Value>],
    ) -> Result<u64, ExecError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let prelude = format!("INSERT INTO {} ({}) ", table, columns.join(", "));
        match self.pool().await? {
            WirePool::Postgres(pool) => {
                let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(prelude.as_str());
                builder.push_values(rows, push_row);
                let result = builder.build().execute(&pool).await?;
                Ok(result.rows_affected())
            }
            WirePool::Sqlite(pool) => {
                let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(prelude.as_str());
                builder.push_values(rows, push_row);
                let result = builder.build().execute(&pool).await?;
                Ok(result.rows_affected())
            }
        }
    }

    async fn count_rows(&self, table: &str) -> Result<Option<i64>, ExecError> {
        let query = format!("SELECT COUNT(*) FROM {table}");
        let count = match self.pool().await? {
            WirePool::Postgres(pool) => {
                sqlx::query_scalar::<_, i64>(&query).fetch_one(&pool).await?
            }
            WirePool::Sqlite(pool) => {
                sqlx::query_scalar::<_, i64>(&query).fetch_one(&pool).await?
            }
        };
        Ok(Some(count))
    }

    async fn close(&self) {
        let mut slot = self.pool.lock().await;
        match slot.take() {
            Some(WirePool::Postgres(pool)) => pool.close().await,
            Some(WirePool::Sqlite(pool)) => pool.close().await,
            None => {}
        }
    }
}

fn push_row<DB>(mut builder: sqlx::query_builder::Separated<'_, '_, DB, &'static str>, row: &Vec<Value>)
where
    DB: sqlx::Database,
    for<'q> i64: sqlx::Encode<'q, DB> + sqlx::Type<DB>,
    for<'q> f64: sqlx::Encode<'q, DB> + sqlx::Type<DB>,
    for<'q> String: sqlx::Encode<'q, DB> + sqlx::Type<DB>,
    for<'q> chrono::NaiveDateTime: sqlx::Encode<'q, DB> + sqlx::Type<DB>,
{
    for value in row {
        match value {
            Value::Int(v) => {
                builder.push_bind(*v);
            }
            Value::Float(v) => {
                builder.push_bind(*v);
            }
            Value::Text(v) => {
                builder.push_bind(v.clone());
            }
            Value::Timestamp(v) => {
                builder.push_bind(*v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_unsupported_url_schemes() {
        let adapter = WireAdapter::new("mysql://nope:3306/db");
        let err = adapter.execute("SELECT 1").await.unwrap_err();
        assert!(matches!(err, ExecError::UnsupportedUrl(url) if url.contains("mysql")));
    }

    #[tokio::test]
    async fn close_without_a_connection_is_a_noop() {
        let adapter = WireAdapter::new("sqlite://never-opened.db");
        adapter.close().await;
    }
}
