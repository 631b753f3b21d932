//! Shared Module
//!
//! The framework-independent core: error entries, the request-scoped
//! collector, and the error and configuration types used on both sides.
//! Nothing in here depends on axum, so it compiles without the `ssr` feature.

/// Attached error records and caller locations
pub mod entry;

/// Request-scoped error collector
pub mod collector;

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use entry::{BoxError, ErrorEntry, UNKNOWN_CALLER};
pub use collector::ErrorCollector;
pub use error::CollectorError;
pub use config::{ServerConfig, ServerConfigBuilder, ConfigError};
