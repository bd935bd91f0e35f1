//! Configuration file and resolution
//!
//! Precedence, highest first: command-line flag, environment
//! (`DATABASE_URL`, `PORT`), config file, built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogConfig;
use crate::store::{redact_database_url, StoreConfig};

use super::args::ConfigArgs;
use super::errors::{CliError, CliResult};

/// Config file read when `--config` is not given, if it exists
pub const DEFAULT_CONFIG_PATH: &str = "./userbase.json";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// PostgreSQL connection string (host, credentials, database, sslmode)
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Load `path` if given, else the default file if present, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply `DATABASE_URL` and `PORT` as returned by `var`.
    pub fn apply_env<F>(&mut self, var: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            self.database_url = Some(url);
        }

        if let Some(port) = var("PORT").filter(|v| !v.trim().is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| CliError::config_error(format!("Invalid PORT: '{}'", port)))?;
        }

        Ok(())
    }

    /// Apply command-line overrides
    pub fn apply_args(&mut self, args: &ConfigArgs, port: Option<u16>) {
        if let Some(url) = &args.database_url {
            self.database_url = Some(url.clone());
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    /// Full resolution from file, process environment, and flags.
    pub fn resolve(args: &ConfigArgs, port: Option<u16>) -> CliResult<Self> {
        let mut config = Self::load_or_default(args.config.as_deref())?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_args(args, port);
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        self.server.validate().map_err(CliError::config_error)?;

        if self.store.max_connections == 0 {
            return Err(CliError::config_error("store.max_connections must be > 0"));
        }

        if self.log.level.trim().is_empty() {
            return Err(CliError::config_error("log.level must not be empty"));
        }

        Ok(())
    }

    /// The connection string, or a config error naming where to set it.
    pub fn require_database_url(&self) -> CliResult<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                CliError::config_error(
                    "No database URL: pass --database-url, set DATABASE_URL, or add database_url to the config file",
                )
            })
    }

    /// Copy safe to print: the database password is masked.
    pub fn redacted(&self) -> Self {
        Self {
            database_url: self.database_url.as_deref().map(redact_database_url),
            ..self.clone()
        }
    }
}
