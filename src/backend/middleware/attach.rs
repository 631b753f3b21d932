/**
 * Attaching Errors to a Request
 *
 * Handlers downstream of the error logger record errors here. Attaching is
 * observability only: it never changes the response.
 *
 * # Call Surfaces
 *
 * - `attach_error(&request, err)` - for handlers that hold the whole request
 * - `attach_error_to(&extensions, err)` - for code that only has the parts
 * - `RequestErrors` - an extractor handing the collector to the handler
 *
 * # Missing Collector
 *
 * `attach_error` and `attach_error_to` do nothing (apart from a warning) if the
 * error logger middleware is not installed. The `try_` variants return
 * `CollectorError::Missing` instead. The `RequestErrors` extractor rejects the
 * request with a 500.
 */

use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, Extensions, Request},
};

use crate::backend::error::BackendError;
use crate::shared::entry::caller_location;
use crate::shared::{BoxError, CollectorError, ErrorCollector};

/// Attach `error` to the collector installed on `request`.
///
/// The caller's `<file>:<line>` is recorded with the error. Without an
/// installed collector the error is dropped and a warning is emitted.
///
/// # Example
///
/// ```rust,no_run
/// use axum::extract::Request;
/// use request_errors::attach_error;
///
/// async fn handler(request: Request) -> &'static str {
///     attach_error(&request, "cache miss");
///     "ok"
/// }
/// ```
#[track_caller]
pub fn attach_error<B>(request: &Request<B>, error: impl Into<BoxError>) {
    attach_error_to(request.extensions(), error);
}

/// Like [`attach_error`], but reports a missing collector.
#[track_caller]
pub fn try_attach_error<B>(
    request: &Request<B>,
    error: impl Into<BoxError>,
) -> Result<(), CollectorError> {
    try_attach_error_to(request.extensions(), error)
}

/// Attach `error` to the collector stored in `extensions`.
#[track_caller]
pub fn attach_error_to(extensions: &Extensions, error: impl Into<BoxError>) {
    match extensions.get::<ErrorCollector>() {
        Some(collector) => collector.attach(error),
        None => {
            let error: BoxError = error.into();
            tracing::warn!(
                error = %error,
                caller = %caller_location(Location::caller()),
                "error attached outside the error logger middleware, dropping it"
            );
        }
    }
}

/// Like [`attach_error_to`], but reports a missing collector.
#[track_caller]
pub fn try_attach_error_to(
    extensions: &Extensions,
    error: impl Into<BoxError>,
) -> Result<(), CollectorError> {
    match extensions.get::<ErrorCollector>() {
        Some(collector) => {
            collector.attach(error);
            Ok(())
        }
        None => Err(CollectorError::Missing),
    }
}

/// Extractor giving a handler the request's error collector
///
/// ```rust,no_run
/// use request_errors::RequestErrors;
///
/// async fn handler(errors: RequestErrors) -> &'static str {
///     errors.attach("db timeout");
///     "ok"
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RequestErrors(pub ErrorCollector);

impl RequestErrors {
    /// Attach an error, recording the caller's location.
    #[track_caller]
    pub fn attach(&self, error: impl Into<BoxError>) {
        self.0.attach(error);
    }

    /// The underlying collector handle.
    pub fn collector(&self) -> &ErrorCollector {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RequestErrors
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let collector = parts
            .extensions
            .get::<ErrorCollector>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("ErrorCollector not found in request extensions");
                BackendError::from(CollectorError::Missing)
            })?;

        Ok(RequestErrors(collector))
    }
}
