//! CLI argument definitions using clap
//!
//! Commands:
//! - userbase serve [--config <path>] [--database-url <url>] [--port <n>] [--memory]
//! - userbase init-db [--config <path>] [--database-url <url>]
//! - userbase check-config [--config <path>] [--database-url <url>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// userbase - user records over HTTP, stored in PostgreSQL
#[derive(Parser, Debug)]
#[command(name = "userbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to configuration file (default: ./userbase.json if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// PostgreSQL connection string, overrides DATABASE_URL
    #[arg(long)]
    pub database_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        common: ConfigArgs,

        /// Port to listen on, overrides PORT and the config file
        #[arg(long)]
        port: Option<u16>,

        /// Keep records in memory instead of PostgreSQL
        #[arg(long)]
        memory: bool,
    },

    /// Create the users table and exit
    InitDb {
        #[command(flatten)]
        common: ConfigArgs,
    },

    /// Print the resolved configuration and exit
    CheckConfig {
        #[command(flatten)]
        common: ConfigArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
