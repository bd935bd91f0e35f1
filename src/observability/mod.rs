//! Observability for userbase
//!
//! Structured logging through `tracing`. Events carry an `event` field in
//! SCREAMING_SNAKE_CASE plus key/value context, one line per event:
//!
//! ```ignore
//! tracing::info!(event = "SERVER_START", addr = %addr);
//! ```

mod logger;

pub use logger::{init_logging, LogConfig};
