//! PostgreSQL record store.
//!
//! Every statement is parameterized. The pool is the only shared mutable
//! resource; sqlx hands out and returns connections per statement.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{error, info};

use crate::record::{Record, RecordId, RecordInput};

use super::config::{redact_database_url, StoreConfig};
use super::errors::{StoreError, StoreResult};
use super::RecordStore;

const CREATE_TABLE_SQL: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name TEXT, email TEXT)";

// Columns are nullable in the schema; rows written by other tools decode as ''.
const RECORD_COLUMNS: &str = "id, COALESCE(name, '') AS name, COALESCE(email, '') AS email";

/// PostgreSQL-backed record store
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Open a pool against `database_url` and create the table if needed.
    ///
    /// There is no retry: a failure here is meant to stop the process.
    pub async fn connect(database_url: &str, config: &StoreConfig) -> StoreResult<Self> {
        let started_at = Instant::now();
        let target = redact_database_url(database_url);
        info!(event = "STORE_CONNECT", status = "start", url = %target);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(database_url)
            .await
            .map_err(|err| {
                error!(
                    event = "STORE_CONNECT",
                    status = "error",
                    url = %target,
                    duration_ms = started_at.elapsed().as_millis() as u64,
                    error = %err
                );
                StoreError::Connect(err.to_string())
            })?;

        let store = Self::from_pool(pool);
        store.ensure_schema().await.map_err(|err| {
            error!(event = "STORE_SCHEMA", status = "error", error = %err);
            StoreError::Connect(err.to_string())
        })?;

        info!(
            event = "STORE_CONNECT",
            status = "ok",
            url = %target,
            duration_ms = started_at.elapsed().as_millis() as u64
        );
        Ok(store)
    }

    /// Wrap an existing pool without touching the schema.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Wait for checked-out connections and close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Record>> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM users ORDER BY id");
        let records = sqlx::query_as::<_, Record>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn create(&self, input: RecordInput) -> StoreResult<Record> {
        let sql = format!("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING {RECORD_COLUMNS}");
        let record = sqlx::query_as::<_, Record>(&sql)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(record)
    }

    async fn get_by_id(&self, id: RecordId) -> StoreResult<Record> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, Record>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: RecordId, input: RecordInput) -> StoreResult<Record> {
        // RETURNING reads back the row the UPDATE wrote, so a concurrent
        // delete cannot slip in between the write and the read.
        let sql = format!(
            "UPDATE users SET name = $1, email = $2 WHERE id = $3 RETURNING {RECORD_COLUMNS}"
        );
        sqlx::query_as::<_, Record>(&sql)
            .bind(&input.name)
            .bind(&input.email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: RecordId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
