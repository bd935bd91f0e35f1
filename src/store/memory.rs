//! In-process record store.
//!
//! Mirrors the PostgreSQL store: ids come from a counter that only moves
//! forward, listing is in id order, and a missing id is `NotFound`.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::record::{Record, RecordId, RecordInput};

use super::errors::{StoreError, StoreResult};
use super::RecordStore;

#[derive(Debug, Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<RecordId, Record>,
}

/// Record store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    table: Mutex<Table>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records
    pub fn len(&self) -> StoreResult<usize> {
        self.with_table(|table| Ok(table.rows.len()))
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn with_table<T>(&self, f: impl FnOnce(&mut Table) -> StoreResult<T>) -> StoreResult<T> {
        let mut table = self.table.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut table)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Record>> {
        self.with_table(|table| Ok(table.rows.values().cloned().collect()))
    }

    async fn create(&self, input: RecordInput) -> StoreResult<Record> {
        self.with_table(|table| {
            table.last_id = table
                .last_id
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted)?;
            let record = Record::new(RecordId::new(table.last_id), input);
            table.rows.insert(record.id, record.clone());
            Ok(record)
        })
    }

    async fn get_by_id(&self, id: RecordId) -> StoreResult<Record> {
        self.with_table(|table| table.rows.get(&id).cloned().ok_or(StoreError::NotFound(id)))
    }

    async fn update(&self, id: RecordId, input: RecordInput) -> StoreResult<Record> {
        self.with_table(|table| {
            let row = table.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
            row.name = input.name;
            row.email = input.email;
            Ok(row.clone())
        })
    }

    async fn delete(&self, id: RecordId) -> StoreResult<()> {
        self.with_table(|table| {
            table
                .rows
                .remove(&id)
                .map(|_| ())
                .ok_or(StoreError::NotFound(id))
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        self.with_table(|_| Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryRecordStore::new();
        let first = store.create(RecordInput::new("a", "a@x")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.create(RecordInput::new("b", "b@x")).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryRecordStore::new();
        let err = store
            .update(RecordId::new(5), RecordInput::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_poisoned_table_is_an_error() {
        let store = std::sync::Arc::new(MemoryRecordStore::new());
        store.create(RecordInput::new("a", "a@x")).await.unwrap();

        let holder = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.table.lock().unwrap();
            panic!("poison the table");
        })
        .join();

        assert!(matches!(store.len(), Err(StoreError::Poisoned)));
        assert!(matches!(store.is_empty(), Err(StoreError::Poisoned)));
        assert!(matches!(store.list_all().await, Err(StoreError::Poisoned)));
    }
}
