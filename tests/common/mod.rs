//! Shared store contract checks, run against every `RecordStore`.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use userbase::record::{RecordId, RecordInput};
use userbase::store::RecordStore;

/// Create, read back, update, delete, and confirm removal.
pub async fn exercise_lifecycle(store: &dyn RecordStore) {
    let created = store
        .create(RecordInput::new("Alice", "a@x.com"))
        .await
        .unwrap();
    assert_eq!(created.name, "Alice");
    assert_eq!(created.email, "a@x.com");

    let fetched = store.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = store
        .update(created.id, RecordInput::new("Alicia", "alicia@x.com"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.email, "alicia@x.com");
    assert_eq!(store.get_by_id(created.id).await.unwrap(), updated);

    store.delete(created.id).await.unwrap();
    assert!(store.get_by_id(created.id).await.unwrap_err().is_not_found());
    assert!(store.delete(created.id).await.unwrap_err().is_not_found());
}

/// Missing ids are `NotFound` for every keyed operation.
pub async fn exercise_missing(store: &dyn RecordStore, missing: RecordId) {
    assert!(store.get_by_id(missing).await.unwrap_err().is_not_found());
    assert!(store
        .update(missing, RecordInput::new("x", "y"))
        .await
        .unwrap_err()
        .is_not_found());
    assert!(store.delete(missing).await.unwrap_err().is_not_found());
}

/// Concurrent creates each get their own id.
pub async fn exercise_concurrent_creates(store: Arc<dyn RecordStore>, count: usize) -> HashSet<RecordId> {
    let mut tasks = Vec::with_capacity(count);
    for i in 0..count {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store
                .create(RecordInput::new(format!("user{i}"), format!("user{i}@x.com")))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.unwrap());
    }
    assert_eq!(ids.len(), count);
    ids
}
