/**
 * Server Configuration
 * 
 * Loads `ServerConfig` from environment variables, with defaults for local
 * development.
 * 
 * # Variables
 * 
 * - `SERVER_HOST` - bind address (default `0.0.0.0`)
 * - `SERVER_PORT` - port (default `3000`)
 * - `REQUEST_ID_HEADER` - request identifier header (default `x-request-id`)
 * 
 * A `.env` file is read by the binary before this runs.
 */

use std::net::IpAddr;

use crate::shared::{ConfigError, ServerConfig};

/// Load the server configuration from the process environment
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    let config = config_from_lookup(|key| std::env::var(key).ok())?;
    tracing::info!(
        addr = %config.socket_addr(),
        request_id_header = %config.request_id_header,
        "Server configuration loaded"
    );
    Ok(config)
}

/// Build the configuration from an arbitrary key lookup
/// 
/// Unset keys keep their defaults; set but unparsable values are errors.
pub fn config_from_lookup<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = ServerConfig::builder();

    if let Some(host) = lookup("SERVER_HOST") {
        let host = host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        builder = builder.host(host);
    }

    if let Some(port) = lookup("SERVER_PORT") {
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        builder = builder.port(port);
    }

    if let Some(header) = lookup("REQUEST_ID_HEADER") {
        builder = builder.request_id_header(header);
    }

    builder.build()
}
