//! HTTP server settings loaded from config.toml
//!
//! The `[server]` table is optional; every field has a default. `HOST` and `PORT`
//! environment variables take precedence over the file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` string to bind.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Replaces host and port with the given override values when present.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if `port` is not a valid port number.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Result<Self> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port.trim().parse().map_err(|e| Error::Config {
                message: format!("Invalid PORT value {port:?}: {e}"),
            })?;
        }
        Ok(self)
    }

    /// Applies the `HOST` and `PORT` environment variables.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from ./config.toml, or defaults when the file does not exist
pub fn load_default_config() -> Result<Config> {
    let path = Path::new("config.toml");
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!("No config.toml found, using default server settings");
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_server_config() {
        let toml_str = r#"
            [server]
            host = "127.0.0.1"
            port = 3000
            cors_origins = ["http://localhost:5173"]
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.server.socket_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_server_table() {
        let config = parse_config("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = parse_config("[server\nport = ");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::default()
            .with_overrides(Some("localhost".to_string()), Some("9090".to_string()))
            .unwrap();
        assert_eq!(config.socket_addr(), "localhost:9090");

        let unchanged = ServerConfig::default().with_overrides(None, None).unwrap();
        assert_eq!(unchanged, ServerConfig::default());
    }

    #[test]
    fn test_invalid_port_override() {
        let result = ServerConfig::default().with_overrides(None, Some("http".to_string()));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
