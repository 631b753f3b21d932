//! Error Entries
//!
//! An [`ErrorEntry`] is one attached error: the error value itself plus the
//! `<file>:<line>` of the call that attached it. Entries are immutable once
//! created and cheap to clone, so a collector snapshot can be handed around
//! without copying the underlying error.
//!
//! # Caller Location
//!
//! Locations are captured with `#[track_caller]`. Every attach surface in this
//! crate forwards the attribute, so the recorded location is the handler line
//! that called `attach`, not a line inside this crate.
//!
//! ```rust
//! use request_errors::shared::ErrorEntry;
//!
//! let entry = ErrorEntry::new("db timeout");
//! assert_eq!(entry.message(), "db timeout");
//! assert!(entry.location().contains(':'));
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

/// Boxed error accepted by every attach surface.
///
/// Anything implementing `std::error::Error + Send + Sync`, as well as `&str`
/// and `String`, converts into this.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Location string used when the caller's file name cannot be determined.
pub const UNKNOWN_CALLER: &str = "unable to determine caller info";

/// One attached error and the place it was attached from.
#[derive(Clone)]
pub struct ErrorEntry {
    error: Arc<dyn StdError + Send + Sync + 'static>,
    location: String,
}

impl ErrorEntry {
    /// Create an entry located at the caller of this function.
    #[track_caller]
    pub fn new(error: impl Into<BoxError>) -> Self {
        Self::with_location(error, caller_location(Location::caller()))
    }

    /// Create an entry with an explicit location string.
    pub fn with_location(error: impl Into<BoxError>, location: impl Into<String>) -> Self {
        let error: BoxError = error.into();
        Self {
            error: Arc::from(error),
            location: location.into(),
        }
    }

    /// The attached error value.
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.error
    }

    /// The error's textual description.
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// `<basename>:<line>` of the attach call, or [`UNKNOWN_CALLER`].
    pub fn location(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.error, self.location)
    }
}

impl fmt::Debug for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorEntry")
            .field("error", &self.message())
            .field("location", &self.location)
            .finish()
    }
}

/// Format a captured [`Location`] as `<basename>:<line>`.
pub fn caller_location(location: &Location<'_>) -> String {
    format_location(location.file(), location.line())
}

/// Format a source path and line as `<basename>:<line>`.
///
/// Falls back to [`UNKNOWN_CALLER`] when `file` has no final path component.
pub fn format_location(file: &str, line: u32) -> String {
    match Path::new(file).file_name().and_then(|name| name.to_str()) {
        Some(name) => format!("{}:{}", name, line),
        None => UNKNOWN_CALLER.to_string(),
    }
}
