/**
 * Server Initialization
 * 
 * Builds the Axum application and sets up logging.
 * 
 * # Layer Order (outermost first)
 * 
 * 1. `SetRequestIdLayer` - reuses an incoming request id header or stamps a UUID
 * 2. `PropagateRequestIdLayer` - copies the id onto the response
 * 3. Error logging middleware (added in `create_router`)
 * 4. Routes
 */

use axum::{http::HeaderName, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing_subscriber::EnvFilter;

use crate::backend::middleware::{ErrorLogger, TowerRequestId};
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::{ConfigError, ServerConfig};

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `ConfigError::InvalidHeader` if the configured request id header is
/// not a valid HTTP header name.
pub fn create_app(config: &ServerConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing request error logging server");

    let header = HeaderName::from_bytes(config.request_id_header.as_bytes())
        .map_err(|_| ConfigError::InvalidHeader(config.request_id_header.clone()))?;

    let app_state = AppState::new(ErrorLogger::new(TowerRequestId));

    let app = create_router(app_state)
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid));

    tracing::info!("Router configured");

    Ok(app)
}

/// Install the global tracing subscriber
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();
}
