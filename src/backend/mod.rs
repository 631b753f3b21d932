//! Backend Module
//!
//! Server-side code: the error logging middleware and the Axum server that
//! demonstrates it. Only compiled with the `ssr` feature.
//!
//! # Architecture
//!
//! - **`middleware`** - error collector installation, attach calls, request ids
//! - **`error`** - response error type for handlers and extractors
//! - **`server`** - state, configuration, app creation
//! - **`routes`** - router assembly
//! - **`demo`** - handlers that attach errors
//!
//! # Request Flow
//!
//! ```text
//! request ─▶ SetRequestId ─▶ PropagateRequestId ─▶ error_logger ─▶ handler
//!                                                    │               │
//!                                        installs ErrorCollector   attaches
//!                                                    │
//!                                   logs one line per entry after the handler
//! ```

/// Request middleware
pub mod middleware;

/// Backend error types
pub mod error;

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Demo handlers
pub mod demo;

/// Re-export commonly used types
pub use server::create_app;
pub use error::BackendError;
