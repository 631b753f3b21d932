//! Shared Error Types
//!
//! Errors raised by the request-independent core: the collector lookup and
//! configuration loading. They carry no HTTP semantics; the backend maps them
//! to status codes in `backend::error`.
//!
//! # Usage
//!
//! ```rust
//! use request_errors::shared::error::CollectorError;
//!
//! let error = CollectorError::Missing;
//! assert!(error.to_string().contains("no error collector"));
//! ```
use thiserror::Error;

/// Failure to reach the request's error collector
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectorError {
    /// The error logger middleware was not installed ahead of the caller
    #[error("no error collector installed for this request (is the error logger middleware layered?)")]
    Missing,
}
