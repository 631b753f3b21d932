/**
 * Request Identifier Sources
 *
 * The error logger tags every line with the identifier of the request it
 * belongs to. Producing that identifier is somebody else's job (usually
 * tower-http's `SetRequestIdLayer`), so the logger only asks a
 * `RequestIdSource` for it. The identifier is opaque and passed through as-is;
 * bytes that are not valid UTF-8 are replaced with U+FFFD rather than dropped.
 *
 * # Provided Sources
 *
 * - `TowerRequestId` - reads the `RequestId` extension set by tower-http,
 *   falling back to the `x-request-id` header
 * - `HeaderRequestId` - reads a named header
 * - `FixedRequestId` - always returns the same value (useful in tests)
 */

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
};
use tower_http::request_id::RequestId;

use crate::shared::config::DEFAULT_REQUEST_ID_HEADER;
use crate::shared::ConfigError;

/// Looks up the identifier of an in-flight request.
pub trait RequestIdSource: Send + Sync + 'static {
    /// Identifier for `request`, or `None` if it has none.
    fn request_id(&self, request: &Request) -> Option<String>;
}

/// Reads the identifier stamped by `tower_http::request_id::SetRequestIdLayer`.
///
/// Requests that passed through the layer carry a `RequestId` extension. If
/// it is absent the `x-request-id` header is tried instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TowerRequestId;

impl RequestIdSource for TowerRequestId {
    fn request_id(&self, request: &Request) -> Option<String> {
        if let Some(id) = request.extensions().get::<RequestId>() {
            return Some(header_text(id.header_value()));
        }
        request
            .headers()
            .get(DEFAULT_REQUEST_ID_HEADER)
            .map(header_text)
    }
}

/// Reads the identifier from a request header.
#[derive(Debug, Clone)]
pub struct HeaderRequestId {
    header: HeaderName,
}

impl HeaderRequestId {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }

    /// Build from a header name string, e.g. `"x-correlation-id"`.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        HeaderName::from_bytes(name.as_bytes())
            .map(Self::new)
            .map_err(|_| ConfigError::InvalidHeader(name.to_string()))
    }

    pub fn header(&self) -> &HeaderName {
        &self.header
    }
}

impl Default for HeaderRequestId {
    fn default() -> Self {
        Self::new(HeaderName::from_static(DEFAULT_REQUEST_ID_HEADER))
    }
}

impl RequestIdSource for HeaderRequestId {
    fn request_id(&self, request: &Request) -> Option<String> {
        request
            .headers()
            .get(&self.header)
            .map(header_text)
    }
}

fn header_text(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

/// Returns the same identifier for every request.
#[derive(Debug, Clone)]
pub struct FixedRequestId(String);

impl FixedRequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl RequestIdSource for FixedRequestId {
    fn request_id(&self, _request: &Request) -> Option<String> {
        Some(self.0.clone())
    }
}
