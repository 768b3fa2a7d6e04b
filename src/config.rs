//! Server configuration.
//!
//! Values come from defaults, then the environment (optionally seeded from a
//! `.env` file), then command-line flags.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default bind host for the HTTP transport.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port for the HTTP transport.
pub const DEFAULT_PORT: u16 = 8080;

/// Default SeaTunnel REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8090";

/// Environment variable names.
pub mod env_vars {
    pub const MCP_HOST: &str = "MCP_HOST";
    pub const MCP_PORT: &str = "MCP_PORT";
    pub const SEATUNNEL_API_URL: &str = "SEATUNNEL_API_URL";
    pub const SEATUNNEL_API_KEY: &str = "SEATUNNEL_API_KEY";
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    #[error("Invalid host {value:?}: {reason}")]
    InvalidHost { value: String, reason: String },

    #[error("Failed to load env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host for the HTTP transport
    pub host: String,
    /// Port for the HTTP transport
    pub port: u16,
    /// SeaTunnel REST API base URL
    pub api_url: String,
    /// SeaTunnel API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(env_vars::MCP_HOST).filter(|h| !h.is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup(env_vars::MCP_PORT).filter(|p| !p.is_empty()) {
            config.port = parse_port(&port)?;
        }
        if let Some(url) = lookup(env_vars::SEATUNNEL_API_URL).filter(|u| !u.is_empty()) {
            config.api_url = url;
        }
        config.api_key = lookup(env_vars::SEATUNNEL_API_KEY).filter(|k| !k.is_empty());

        Ok(config)
    }

    /// Apply command-line overrides. `None` leaves a value alone.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        api_url: Option<String>,
        api_key: Option<String>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(api_key) = api_key {
            self.api_key = Some(api_key).filter(|k| !k.is_empty());
        }
        self
    }

    /// Address the HTTP transport binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = match self.host.as_str() {
            "localhost" => IpAddr::from([127, 0, 0, 1]),
            host => host.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidHost {
                value: host.to_string(),
                reason: e.to_string(),
            })?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::InvalidPort {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Load variables from an env file into the process environment.
///
/// An explicit path must exist. Without one, `.env` in the working directory
/// is loaded if present. Variables already set are not overridden.
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            tracing::debug!(path = %path.display(), "Loaded env file");
        }
        None => {
            if let Ok(path) = dotenvy::dotenv() {
                tracing::debug!(path = %path.display(), "Loaded env file");
            }
        }
    }
    Ok(())
}
