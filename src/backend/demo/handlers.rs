/**
 * Demo Handlers
 * 
 * Small handlers that attach errors to the request in different ways, so the
 * error logging middleware can be watched end to end.
 * 
 * # Routes
 * 
 * - `GET /health` - attaches nothing
 * - `GET /demo/timeout` - attaches `db timeout`, still answers 200
 * - `GET /demo/multi` - attaches `E1` then `E2`
 * - `GET /demo/raw` - attaches through the request-taking `attach_error`
 * - `GET /demo/fanout` - attaches from spawned tasks within one request
 * - `GET /demo/lookup/{key}` - attaches and returns 404 for unknown keys
 */

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    response::Json,
};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::middleware::{attach_error, RequestErrors};
use crate::backend::server::state::AppState;

/// Number of tasks `GET /demo/fanout` spreads its work over
pub const FANOUT_SHARDS: usize = 4;

/// Body returned by the status-style demo routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    /// Errors attached so far during this request
    pub attached: usize,
}

impl StatusResponse {
    fn from_errors(errors: &RequestErrors) -> Self {
        let attached = errors.collector().len();
        Self {
            status: if attached == 0 { "ok" } else { "degraded" }.to_string(),
            attached,
        }
    }
}

/// Body returned by `GET /demo/lookup/{key}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub key: String,
    pub value: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        attached: 0,
    })
}

/// Simulates a failed query whose failure is reported but not surfaced.
pub async fn handle_timeout(errors: RequestErrors) -> Json<StatusResponse> {
    errors.attach("db timeout");
    Json(StatusResponse::from_errors(&errors))
}

pub async fn handle_multi(errors: RequestErrors) -> Json<StatusResponse> {
    errors.attach("E1");
    errors.attach("E2");
    Json(StatusResponse::from_errors(&errors))
}

pub async fn handle_raw(request: Request) -> StatusCode {
    attach_error(&request, "upstream returned malformed payload");
    StatusCode::ACCEPTED
}

/// Odd shards fail; every failure is attached from its own task.
pub async fn handle_fanout(errors: RequestErrors) -> Json<StatusResponse> {
    let shards = (0..FANOUT_SHARDS).map(|shard| {
        let errors = errors.clone();
        tokio::spawn(async move {
            if shard % 2 == 1 {
                errors.attach(format!("shard {} unavailable", shard));
            }
        })
    });

    for result in join_all(shards).await {
        if let Err(e) = result {
            tracing::warn!("fanout shard task failed: {:?}", e);
        }
    }

    Json(StatusResponse::from_errors(&errors))
}

pub async fn handle_lookup(
    State(state): State<AppState>,
    Path(key): Path<String>,
    errors: RequestErrors,
) -> Result<Json<LookupResponse>, BackendError> {
    match state.catalog.get(&key) {
        Some(value) => Ok(Json(LookupResponse {
            key,
            value: value.clone(),
        })),
        None => {
            let err = BackendError::handler(
                StatusCode::NOT_FOUND,
                format!("no entry for key '{}'", key),
            );
            errors.attach(err.message());
            Err(err)
        }
    }
}

pub async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "404 Not Found")
}
