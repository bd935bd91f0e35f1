//! userbase - user records over HTTP, stored in PostgreSQL
//!
//! Request flow: middleware chain → router → handler → record store →
//! database, and back out through the same chain.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod record;
pub mod store;
