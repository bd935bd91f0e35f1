//! Config File Tests
//!
//! Loading from disk: partial files fall back to defaults, bad files are
//! config errors, and an explicit path must exist.

use std::io::Write;

use tempfile::NamedTempFile;

use userbase::cli::{CliError, Config, ConfigArgs};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"{
            "database_url": "postgres://app:pw@db:5432/users?sslmode=require",
            "server": {"host": "127.0.0.1", "port": 8100, "resource": "rust"},
            "store": {"max_connections": 4, "acquire_timeout_secs": 5},
            "log": {"level": "debug", "json": true}
        }"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(
        config.database_url.as_deref(),
        Some("postgres://app:pw@db:5432/users?sslmode=require")
    );
    assert_eq!(config.server.socket_addr(), "127.0.0.1:8100");
    assert_eq!(config.server.collection_path(), "/api/rust/users");
    assert_eq!(config.store.max_connections, 4);
    assert!(config.log.json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_uses_defaults() {
    let file = write_config(r#"{"server": {"port": 9000}}"#);

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.resource, "go");
    assert_eq!(config.store.max_connections, 10);
    assert_eq!(config.log.level, "info");
    assert!(config.database_url.is_none());
}

#[test]
fn test_invalid_json_is_config_error() {
    let file = write_config("{ not json");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let err = Config::load_or_default(Some(&missing)).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

#[test]
fn test_invalid_values_fail_resolution() {
    let file = write_config(r#"{"server": {"resource": "a/b"}}"#);
    let args = ConfigArgs {
        config: Some(file.path().to_path_buf()),
        database_url: None,
    };
    let err = Config::resolve(&args, None).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

#[test]
fn test_flag_port_wins_over_file() {
    let file = write_config(r#"{"server": {"port": 9000}}"#);
    let args = ConfigArgs {
        config: Some(file.path().to_path_buf()),
        database_url: Some("postgres://flag/db".to_string()),
    };
    let config = Config::resolve(&args, Some(9100)).unwrap();
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.database_url.as_deref(), Some("postgres://flag/db"));
}
