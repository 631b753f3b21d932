//! Route Configuration Module
//!
//! Configures the HTTP routes of the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and middleware layering
//! └── demo_routes.rs  - Demo endpoints that attach errors
//! ```
//!
//! # Layering
//!
//! Every route, the fallback included, runs inside the error logging
//! middleware. Request identifier layers are added around the router in
//! `backend::server::init`.

/// Main router creation
pub mod router;

/// Demo routes
pub mod demo_routes;

pub use router::create_router;
