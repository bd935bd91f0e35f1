//! CLI module for userbase
//!
//! Provides command-line interface for:
//! - serve: Open the store and run the HTTP API
//! - init-db: Create the users table
//! - check-config: Show the resolved configuration

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{check_config, init_db, run, run_command, serve};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliResult};
