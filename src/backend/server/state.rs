/**
 * Application State Management
 * 
 * `AppState` is the state shared by the server's handlers. The error logger
 * state is handed to the middleware separately in `create_router`.
 * 
 * # Contents
 * 
 * - The `ErrorLogger` middleware state (request identifier source)
 * - A read-only key/value catalog served by the lookup route
 * 
 * # Thread Safety
 * 
 * Both fields are behind `Arc` and never mutated after startup.
 */

use std::collections::HashMap;
use std::sync::Arc;

use crate::backend::middleware::ErrorLogger;

/// Application state shared across all request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// State for the error logging middleware
    pub error_logger: ErrorLogger,
    /// Entries served by `GET /demo/lookup/{key}`
    pub catalog: Arc<HashMap<String, String>>,
}

impl AppState {
    pub fn new(error_logger: ErrorLogger) -> Self {
        Self {
            error_logger,
            catalog: Arc::new(default_catalog()),
        }
    }

    /// Replace the lookup catalog
    pub fn with_catalog(mut self, catalog: HashMap<String, String>) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ErrorLogger::default())
    }
}

fn default_catalog() -> HashMap<String, String> {
    [("alpha", "first"), ("beta", "second")]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
