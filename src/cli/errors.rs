//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code. The
//! rendered message leads with a stable `USERBASE_CLI_*` code.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file, environment, or flag error
    #[error("USERBASE_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Store or server failed to come up
    #[error("USERBASE_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),

    /// Resolved config could not be rendered
    #[error("USERBASE_CLI_OUTPUT_ERROR: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("missing database url");
        assert_eq!(
            err.to_string(),
            "USERBASE_CLI_CONFIG_ERROR: missing database url"
        );
    }

    #[test]
    fn test_boot_failure_code() {
        let err = CliError::boot_failed("connection refused");
        assert!(err.to_string().starts_with("USERBASE_CLI_BOOT_FAILED: "));
    }
}
