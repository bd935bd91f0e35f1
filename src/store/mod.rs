//! # Record Store
//!
//! The store adapter is the only place that talks to the database. All
//! SQL lives in [`PgRecordStore`]; [`MemoryRecordStore`] implements the
//! same contract in process for tests and database-less runs.
//!
//! A store is built once at startup and shared by every request through
//! an `Arc<dyn RecordStore>`. Implementations keep no per-request state
//! and must be safe to call concurrently.

mod config;
mod errors;
mod memory;
mod postgres;

pub use config::{redact_database_url, StoreConfig};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::record::{Record, RecordId, RecordInput};

/// Shared handle to a store
pub type SharedStore = Arc<dyn RecordStore>;

/// Record store contract
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create the backing table if it does not exist yet.
    async fn ensure_schema(&self) -> StoreResult<()>;

    /// All records in storage order (ascending id).
    async fn list_all(&self) -> StoreResult<Vec<Record>>;

    /// Insert a record and return it with its assigned id.
    async fn create(&self, input: RecordInput) -> StoreResult<Record>;

    /// Fetch one record, `NotFound` if absent.
    async fn get_by_id(&self, id: RecordId) -> StoreResult<Record>;

    /// Overwrite `name` and `email` and return the persisted row.
    ///
    /// `NotFound` if no row has this id; the id itself never changes.
    async fn update(&self, id: RecordId, input: RecordInput) -> StoreResult<Record>;

    /// Remove a record, `NotFound` if absent.
    async fn delete(&self, id: RecordId) -> StoreResult<()>;

    /// Cheap liveness probe used by the health route.
    async fn ping(&self) -> StoreResult<()>;
}
