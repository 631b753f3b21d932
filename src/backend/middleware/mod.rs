//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`error_logger`** - installs the per-request error collector and logs
//!   what was attached once the handler chain returns
//! - **`attach`** - the calls handlers use to attach errors
//! - **`request_id`** - where the logged request identifier comes from
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use request_errors::backend::middleware::{error_logger, ErrorLogger, RequestErrors};
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

pub mod attach;
pub mod error_logger;
pub mod request_id;

pub use attach::{attach_error, attach_error_to, try_attach_error, try_attach_error_to, RequestErrors};
pub use error_logger::{error_logger, log_entries, ErrorLogger};
pub use request_id::{FixedRequestId, HeaderRequestId, RequestIdSource, TowerRequestId};
