//! HTTP Server Configuration
//!
//! Bind address and the resource segment of the API path prefix.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Resource segment of `/api/{resource}/users` (default: "go")
    #[serde(default = "default_resource")]
    pub resource: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_resource() -> String {
    "go".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            resource: default_resource(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prefix under which the record routes are mounted
    pub fn api_prefix(&self) -> String {
        format!("/api/{}", self.resource)
    }

    /// Path of the record collection, e.g. `/api/go/users`
    pub fn collection_path(&self) -> String {
        format!("{}/users", self.api_prefix())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("server.port must be > 0".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("server.host must not be empty".to_string());
        }

        let valid_segment = !self.resource.is_empty()
            && self
                .resource
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid_segment {
            return Err(format!(
                "server.resource must be a single path segment of [A-Za-z0-9_-], got '{}'",
                self.resource
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.resource, "go");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_paths() {
        let config = HttpServerConfig {
            resource: "rust".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_prefix(), "/api/rust");
        assert_eq!(config.collection_path(), "/api/rust/users");
    }

    #[test]
    fn test_rejects_bad_resource() {
        for resource in ["", "a/b", "with space", "../x"] {
            let config = HttpServerConfig {
                resource: resource.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {resource:?}");
        }
    }

    #[test]
    fn test_rejects_zero_port() {
        assert!(HttpServerConfig::with_port(0).validate().is_err());
    }
}
