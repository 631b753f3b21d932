/**
 * Router Configuration
 * 
 * Combines the route configurations into a single Axum router and wraps it
 * in the error logging middleware.
 * 
 * # Layer Order
 * 
 * 1. Demo routes
 * 2. Fallback handler (404)
 * 3. Error logging middleware around all of the above
 */

use axum::{middleware::from_fn_with_state, Router};

use crate::backend::demo::handlers::not_found;
use crate::backend::middleware::error_logger;
use crate::backend::routes::demo_routes::configure_demo_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state, including the error logger's
///   request identifier source
///
/// # Returns
///
/// Router whose every route runs inside the error logging middleware
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_demo_routes(Router::new());

    // Fallback handler for 404
    let router = router.fallback(not_found);

    let router = router.layer(from_fn_with_state(
        app_state.error_logger.clone(),
        error_logger,
    ));

    router.with_state(app_state)
}
