/**
 * Demo Route Configuration
 * 
 * # Routes
 * 
 * - `GET /health` - Liveness, attaches nothing
 * - `GET /demo/timeout` - One attached error, 200 response
 * - `GET /demo/multi` - Two attached errors in order
 * - `GET /demo/raw` - Attach through the request-taking call
 * - `GET /demo/fanout` - Attach from concurrent tasks
 * - `GET /demo/lookup/{key}` - 404 plus an attached error for unknown keys
 */

use axum::{routing::get, Router};

use crate::backend::demo::handlers::{
    handle_fanout, handle_lookup, handle_multi, handle_raw, handle_timeout, health,
};
use crate::backend::server::state::AppState;

/// Configure demo routes
pub fn configure_demo_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/health", get(health))
        .route("/demo/timeout", get(handle_timeout))
        .route("/demo/multi", get(handle_multi))
        .route("/demo/raw", get(handle_raw))
        .route("/demo/fanout", get(handle_fanout))
        .route("/demo/lookup/{key}", get(handle_lookup))
}
