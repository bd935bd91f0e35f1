//! # userbase HTTP Server Module
//!
//! Axum server exposing the record store.
//!
//! # Endpoints
//!
//! - `GET    /health` - Health check
//! - `GET    /api/{resource}/users` - List records
//! - `POST   /api/{resource}/users` - Create a record
//! - `GET    /api/{resource}/users/{id}` - Fetch one record
//! - `PUT    /api/{resource}/users/{id}` - Overwrite name and email
//! - `DELETE /api/{resource}/users/{id}` - Remove a record
//! - `OPTIONS` on any path - CORS preflight, always 200

pub mod config;
pub mod errors;
pub mod extract;
pub mod middleware;
pub mod observability_routes;
pub mod record_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
