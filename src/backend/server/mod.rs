//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState
//! ├── config.rs       - Configuration loading from the environment
//! └── init.rs         - App creation and tracing setup
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use request_errors::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(&config)?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use config::{config_from_lookup, load_config};
pub use init::{create_app, init_tracing};
