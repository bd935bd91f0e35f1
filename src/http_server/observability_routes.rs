//! Observability HTTP Routes
//!
//! Health check reporting whether the record store answers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::store::SharedStore;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health check route at `/health`
pub fn health_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(store)
}

async fn health_handler(State(store): State<SharedStore>) -> impl IntoResponse {
    match store.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::new("ok"))),
        Err(err) => {
            warn!(event = "HEALTH_CHECK_FAILED", error = %err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::new("unavailable")),
            )
        }
    }
}
