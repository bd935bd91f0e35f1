//! CLI command implementations
//!
//! Commands are synchronous; each one that needs I/O builds its own tokio
//! runtime and blocks on it.

use std::sync::Arc;

use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::{MemoryRecordStore, PgRecordStore, SharedStore};

use super::args::{Cli, Command, ConfigArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            common,
            port,
            memory,
        } => serve(&common, port, memory),
        Command::InitDb { common } => init_db(&common),
        Command::CheckConfig { common } => check_config(&common),
    }
}

fn runtime() -> CliResult<Runtime> {
    Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Open the store and serve HTTP until shutdown.
///
/// A store that cannot be opened is fatal: the command returns before
/// binding the listener.
pub fn serve(args: &ConfigArgs, port: Option<u16>, memory: bool) -> CliResult<()> {
    let config = Config::resolve(args, port)?;
    init_logging(&config.log);

    let rt = runtime()?;
    if memory {
        warn!(event = "STORE_MEMORY", "records are kept in memory and lost on exit");
        let store: SharedStore = Arc::new(MemoryRecordStore::new());
        return rt.block_on(start_server(&config, store));
    }

    let url = config.require_database_url()?;
    rt.block_on(async {
        let pg = PgRecordStore::connect(url, &config.store)
            .await
            .map_err(|e| CliError::boot_failed(e.to_string()))?;

        let result = start_server(&config, Arc::new(pg.clone())).await;
        pg.close().await;
        result
    })
}

async fn start_server(config: &Config, store: SharedStore) -> CliResult<()> {
    HttpServer::new(config.server.clone(), store)
        .start()
        .await
        .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
}

/// Connect, create the users table if missing, and exit.
pub fn init_db(args: &ConfigArgs) -> CliResult<()> {
    let config = Config::resolve(args, None)?;
    init_logging(&config.log);
    let url = config.require_database_url()?.to_string();

    let rt = runtime()?;
    rt.block_on(async {
        let pg = PgRecordStore::connect(&url, &config.store)
            .await
            .map_err(|e| CliError::boot_failed(e.to_string()))?;
        pg.close().await;
        Ok::<_, CliError>(())
    })?;

    info!(event = "INIT_DB", status = "ok");
    Ok(())
}

/// Print the resolved configuration with the password masked.
pub fn check_config(args: &ConfigArgs) -> CliResult<()> {
    let config = Config::resolve(args, None)?;
    println!("{}", serde_json::to_string_pretty(&config.redacted())?);
    Ok(())
}
