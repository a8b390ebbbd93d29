use std::env;

use thiserror::Error;

pub const DEFAULT_IP: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.invalid_port: {0}")]
    InvalidPort(String),
}

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - PORT: Port to bind (default: 3000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
        let port = parse_port(env::var("PORT").ok().as_deref())?;

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|p| !p.is_empty()) {
        Some(port) => port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.to_string())),
        None => Ok(DEFAULT_PORT),
    }
}
