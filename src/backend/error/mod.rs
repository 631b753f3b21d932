//! Backend Error Module
//!
//! Error types returned by the server's handlers and extractors, and their
//! conversion into HTTP responses.
//!
//! Note that these are *response* errors. Errors attached to a request for
//! logging never change the response; see `backend::middleware`.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
