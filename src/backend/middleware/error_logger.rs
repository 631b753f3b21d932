/**
 * Error Logging Middleware
 *
 * Installs a fresh `ErrorCollector` on every request, runs the rest of the
 * chain, then logs each attached error as one line:
 *
 * ```text
 * error handling request <request-id>: <error message> <caller location>
 * ```
 *
 * Lines are written in attachment order through `tracing` at ERROR level.
 * The response is returned untouched.
 *
 * # Ordering
 *
 * The middleware must wrap every handler that attaches errors. The request
 * identifier is resolved before the chain runs, so any request-id layer must
 * sit outside this one.
 */

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::backend::middleware::request_id::{RequestIdSource, TowerRequestId};
use crate::shared::{ErrorCollector, ErrorEntry};

/// Middleware state: where request identifiers come from.
///
/// # Example
///
/// ```rust,no_run
/// use axum::{middleware::from_fn_with_state, routing::get, Router};
/// use request_errors::{error_logger, ErrorLogger};
///
/// let app: Router = Router::new()
///     .route("/", get(|| async { "ok" }))
///     .layer(from_fn_with_state(ErrorLogger::default(), error_logger));
/// ```
#[derive(Clone)]
pub struct ErrorLogger {
    request_ids: Arc<dyn RequestIdSource>,
}

impl ErrorLogger {
    pub fn new(source: impl RequestIdSource) -> Self {
        Self {
            request_ids: Arc::new(source),
        }
    }

    pub fn from_arc(source: Arc<dyn RequestIdSource>) -> Self {
        Self { request_ids: source }
    }

    /// Identifier of `request`, empty if the source has none.
    pub fn request_id(&self, request: &Request) -> String {
        self.request_ids.request_id(request).unwrap_or_default()
    }
}

impl Default for ErrorLogger {
    fn default() -> Self {
        Self::new(TowerRequestId)
    }
}

impl std::fmt::Debug for ErrorLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorLogger").finish_non_exhaustive()
    }
}

/// Error logging middleware
///
/// Use with `axum::middleware::from_fn_with_state`.
///
/// This middleware:
/// 1. Creates an empty collector and inserts it into the request extensions
/// 2. Resolves the request identifier
/// 3. Runs the inner handler chain
/// 4. Drains the collector and logs one line per attached error
pub async fn error_logger(
    State(logger): State<ErrorLogger>,
    mut request: Request,
    next: Next,
) -> Response {
    let collector = ErrorCollector::new();
    request.extensions_mut().insert(collector.clone());

    let request_id = logger.request_id(&request);

    let response = next.run(request).await;

    log_entries(&request_id, &collector.drain());

    response
}

/// Write one log line per entry, in order.
pub fn log_entries(request_id: &str, entries: &[ErrorEntry]) {
    for entry in entries {
        tracing::error!(
            "error handling request {}: {} {}",
            request_id,
            entry.message(),
            entry.location()
        );
    }
}
