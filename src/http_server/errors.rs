//! # HTTP API Errors
//!
//! Every failure a handler can hit, mapped to one status code:
//! - 400 for an unparsable id or body
//! - 404 for a missing record, with an empty body
//! - 500 for store failures, logged here and reported without detail

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::record::InvalidRecordId;
use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id is not a positive integer
    #[error("Invalid record id: {0}")]
    InvalidId(String),

    /// Body is not a JSON record
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No record with the requested id
    #[error("Record not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected store failure; the detail is logged, not returned
    #[error("Internal error")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a store failure for `operation`, logging anything but `NotFound`.
    pub fn from_store(operation: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            other => {
                error!(event = "STORE_QUERY_FAILED", operation, error = %other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl From<InvalidRecordId> for ApiError {
    fn from(err: InvalidRecordId) -> Self {
        ApiError::InvalidId(err.0)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound => status.into_response(),
            other => (status, Json(ErrorResponse::from(&other))).into_response(),
        }
    }
}
