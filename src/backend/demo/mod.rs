//! Demo Module
//!
//! Handlers served by `request-errors-server` to exercise the error logging
//! middleware. Route wiring lives in `backend::routes`.

pub mod handlers;

pub use handlers::{LookupResponse, StatusResponse, FANOUT_SHARDS};
