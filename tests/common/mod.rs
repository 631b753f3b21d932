//! Common test utilities and helpers
//!
//! - Log capture for asserting on the middleware's output lines
//! - Router builders wrapping test handlers in the error logger
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod logs;

use axum::{
    body::Body,
    http::Request,
    middleware::from_fn_with_state,
    Router,
};
use request_errors::{error_logger, ErrorLogger, FixedRequestId, HeaderRequestId};

pub use logs::CapturedLogs;

/// Prefix of every line the error logger writes
pub const LINE_PREFIX: &str = "error handling request ";

/// Wrap `routes` in the error logger, with every request identified as `id`
pub fn with_fixed_id(routes: Router, id: &str) -> Router {
    routes.layer(from_fn_with_state(
        ErrorLogger::new(FixedRequestId::new(id)),
        error_logger,
    ))
}

/// Wrap `routes` in the error logger, reading the id from `x-request-id`
pub fn with_header_id(routes: Router) -> Router {
    routes.layer(from_fn_with_state(
        ErrorLogger::new(HeaderRequestId::default()),
        error_logger,
    ))
}

/// GET request for `uri`
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// GET request for `uri` carrying an `x-request-id` header
pub fn get_with_id(uri: &str, id: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-request-id", id)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body to a string
pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
