/**
 * Error Conversion
 * 
 * `IntoResponse` for backend errors, so handlers and extractors can return
 * them directly.
 * 
 * # Response Format
 * 
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    response::{Response, IntoResponse},
    http::{header::CONTENT_TYPE, StatusCode},
    body::Body,
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();
        
        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });
        
        let body = serde_json::to_string(&body).unwrap_or_else(|_| {
            format!(r#"{{"error":"{}","status":{}}}"#, message, status.as_u16())
        });

        Response::builder()
            .status(status)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap_or_else(|_| {
                let mut fallback = Response::new(Body::from("Internal Server Error"));
                *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                fallback
            })
    }
}
