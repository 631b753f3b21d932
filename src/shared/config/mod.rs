//! Application configuration module
//!
//! Provides the server configuration type and its builder. Values are plain
//! data here; reading them from the environment happens in
//! `backend::server::config`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default header carrying the request identifier
pub const DEFAULT_REQUEST_ID_HEADER: &str = "x-request-id";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Header the request identifier is read from and propagated on
    pub request_id_header: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            request_id_header: DEFAULT_REQUEST_ID_HEADER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Socket address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_header_name(&self.request_id_header)
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<IpAddr>,
    port: Option<u16>,
    request_id_header: Option<String>,
}

impl ServerConfigBuilder {
    /// Set the bind address
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the request identifier header name
    pub fn request_id_header(mut self, header: impl Into<String>) -> Self {
        self.request_id_header = Some(header.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();
        let config = ServerConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            request_id_header: self
                .request_id_header
                .map(|header| header.to_ascii_lowercase())
                .unwrap_or(defaults.request_id_header),
        };
        config.validate()?;
        Ok(config)
    }
}

fn validate_header_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::MissingValue("request_id_header"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ConfigError::InvalidHeader(name.to_string()));
    }
    Ok(())
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("invalid host address: {0}")]
    InvalidHost(String),
    #[error("invalid header name: {0}")]
    InvalidHeader(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
