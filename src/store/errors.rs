//! # Store Errors
//!
//! A missing row is reported as `NotFound`, never folded into a driver
//! failure, so the HTTP layer can map the two to 404 and 500.

use thiserror::Error;

use crate::record::RecordId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with the given id
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// The database could not be reached or prepared at startup
    #[error("cannot connect to database: {0}")]
    Connect(String),

    /// Statement failed after the store was opened
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No further ids can be assigned
    #[error("record id space exhausted")]
    IdsExhausted,

    /// In-process store state is unusable
    #[error("store state poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
