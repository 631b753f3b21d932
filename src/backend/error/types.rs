/**
 * Backend Error Types
 * 
 * This module defines the error type returned by the server's HTTP handlers
 * and extractors. These errors are converted to JSON responses.
 * 
 * # Error Categories
 * 
 * ## Handler Errors
 * 
 * Handler errors carry their own status code:
 * - Unknown lookup keys (404)
 * - Invalid request input (400)
 * 
 * ## Collector Errors
 * 
 * The server was wired incorrectly: a handler asked for the request's error
 * collector but the error logger middleware is not layered in front of it.
 * These always map to 500.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::CollectorError;

/// Backend-specific error types
/// 
/// # Usage
/// 
/// ```rust
/// use request_errors::backend::error::BackendError;
/// use axum::http::StatusCode;
/// 
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "no entry for key 'x'");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., unknown key, invalid request)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },
    
    /// The request's error collector could not be reached
    #[error(transparent)]
    CollectorError(#[from] CollectorError),
}

impl BackendError {
    /// Create a new handler error with a status code
    /// 
    /// # Arguments
    /// 
    /// * `status` - HTTP status code
    /// * `message` - Error message
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }
    
    /// Get the HTTP status code for this error
    /// 
    /// # Status Code Mapping
    /// 
    /// - `HandlerError` - Uses the status code from the error
    /// - `CollectorError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::CollectorError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    
    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::CollectorError(err) => err.to_string(),
        }
    }
}
