//! Request Errors - request-scoped error logging for axum
//!
//! Handlers attach errors to the request they are serving; a middleware
//! collects them and, once the handler chain has returned, logs one line per
//! error tagged with the request identifier:
//!
//! ```text
//! error handling request abc123: db timeout handlers.rs:42
//! ```
//!
//! Attaching is purely observability. It never alters the response.
//!
//! # Module Structure
//!
//! - **`shared`** - Framework-independent core
//!   - `ErrorEntry`, `ErrorCollector`
//!   - Error and configuration types
//!
//! - **`backend`** - Axum integration (only compiled with `ssr` feature)
//!   - `error_logger` middleware and `ErrorLogger` state
//!   - `attach_error`, `RequestErrors` extractor
//!   - Request identifier sources
//!   - Demo server
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use request_errors::{error_logger, ErrorLogger, RequestErrors};
//!
//! async fn handler(errors: RequestErrors) -> &'static str {
//!     errors.attach("db timeout");
//!     "ok"
//! }
//!
//! let app: Router = Router::new()
//!     .route("/", get(handler))
//!     .layer(from_fn_with_state(ErrorLogger::default(), error_logger));
//! ```
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Axum middleware, extractors and the server binary

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

pub use shared::{BoxError, CollectorError, ErrorCollector, ErrorEntry};

#[cfg(feature = "ssr")]
pub use backend::middleware::{
    attach_error, attach_error_to, error_logger, try_attach_error, try_attach_error_to,
    ErrorLogger, FixedRequestId, HeaderRequestId, RequestErrors, RequestIdSource, TowerRequestId,
};
