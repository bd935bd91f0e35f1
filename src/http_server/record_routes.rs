//! Record HTTP Routes
//!
//! CRUD endpoints over the record store, mounted under `/api/{resource}`.
//! The collection path is a literal, the item path adds one `{id}`
//! segment, so no request can match both.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::record::{Record, RecordInput};
use crate::store::SharedStore;

use super::errors::{ApiError, ApiResult};
use super::extract::{IdPath, JsonBody};

/// Confirmation payload of a successful delete
pub const DELETED_MESSAGE: &str = "User deleted";

// ==================
// Shared State
// ==================

/// Record state shared across handlers
pub struct RecordState {
    pub store: SharedStore,
}

impl RecordState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

// ==================
// Record Routes
// ==================

/// Create record routes
pub fn record_routes(state: Arc<RecordState>) -> Router {
    Router::new()
        .route("/users", get(list_records_handler).post(create_record_handler))
        .route(
            "/users/:id",
            get(get_record_handler)
                .put(update_record_handler)
                .delete(delete_record_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_records_handler(State(state): State<Arc<RecordState>>) -> ApiResult<Json<Vec<Record>>> {
    let records = state
        .store
        .list_all()
        .await
        .map_err(|e| ApiError::from_store("list", e))?;
    Ok(Json(records))
}

async fn create_record_handler(
    State(state): State<Arc<RecordState>>,
    JsonBody(input): JsonBody<RecordInput>,
) -> ApiResult<Json<Record>> {
    let record = state
        .store
        .create(input)
        .await
        .map_err(|e| ApiError::from_store("create", e))?;
    Ok(Json(record))
}

async fn get_record_handler(
    State(state): State<Arc<RecordState>>,
    IdPath(id): IdPath,
) -> ApiResult<Json<Record>> {
    let record = state
        .store
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_store("get", e))?;
    Ok(Json(record))
}

async fn update_record_handler(
    State(state): State<Arc<RecordState>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<RecordInput>,
) -> ApiResult<Json<Record>> {
    let record = state
        .store
        .update(id, input)
        .await
        .map_err(|e| ApiError::from_store("update", e))?;
    Ok(Json(record))
}

async fn delete_record_handler(
    State(state): State<Arc<RecordState>>,
    IdPath(id): IdPath,
) -> ApiResult<Json<&'static str>> {
    state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::from_store("delete", e))?;
    Ok(Json(DELETED_MESSAGE))
}
