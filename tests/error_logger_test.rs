//! Error logger middleware integration tests
//!
//! Drives routers through `tower::ServiceExt::oneshot` and checks the lines
//! the middleware logs once each request completes.

#![cfg(feature = "ssr")]

mod common;

use axum::{
    body::Body,
    extract::{Path, Request},
    http::{HeaderValue, StatusCode},
    routing::get,
    Router,
};
use pretty_assertions::assert_eq;
use request_errors::{
    attach_error, try_attach_error, CollectorError, ErrorCollector, RequestErrors,
};
use tower::ServiceExt;
use tracing::Level;

use common::{body_string, get_request, get_with_id, with_fixed_id, with_header_id, CapturedLogs};

async fn db_timeout(errors: RequestErrors) -> String {
    let line = line!() + 1;
    errors.attach("db timeout");
    line.to_string()
}

async fn two_errors(errors: RequestErrors) -> &'static str {
    errors.attach("E1");
    errors.attach("E2");
    "done"
}

async fn no_errors() -> &'static str {
    "clean"
}

async fn teapot(errors: RequestErrors) -> (StatusCode, &'static str) {
    errors.attach("brewing failed");
    (StatusCode::IM_A_TEAPOT, "short and stout")
}

async fn raw_attach(request: Request) -> String {
    let line = line!() + 1;
    attach_error(&request, "raw failure");
    line.to_string()
}

async fn checked_attach(request: Request) -> String {
    match try_attach_error(&request, "checked failure") {
        Ok(()) => "attached".to_string(),
        Err(CollectorError::Missing) => "missing".to_string(),
    }
}

async fn named_error(Path(name): Path<String>, errors: RequestErrors) -> &'static str {
    tokio::task::yield_now().await;
    errors.attach(format!("failure from {}", name));
    tokio::task::yield_now().await;
    "ok"
}

async fn same_collector(errors: RequestErrors, request: Request) -> String {
    errors.attach("via extractor");
    attach_error(&request, "via request");
    match request.extensions().get::<ErrorCollector>() {
        Some(collector) => format!(
            "{} {}",
            collector.same_as(errors.collector()),
            collector.len()
        ),
        None => "missing".to_string(),
    }
}

#[tokio::test]
async fn test_single_error_end_to_end() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let app = with_fixed_id(Router::new().route("/", get(db_timeout)), "abc123");
    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let line = body_string(response).await;

    assert_eq!(
        logs.error_lines(),
        vec![format!(
            "error handling request abc123: db timeout error_logger_test.rs:{}",
            line
        )]
    );
}

#[tokio::test]
async fn test_lines_logged_at_error_level() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let app = with_fixed_id(Router::new().route("/", get(db_timeout)), "abc123");
    app.oneshot(get_request("/")).await.unwrap();

    let levels: Vec<Level> = logs
        .all()
        .into_iter()
        .filter(|line| line.message.starts_with(common::LINE_PREFIX))
        .map(|line| line.level)
        .collect();
    assert_eq!(levels, vec![Level::ERROR]);
}

#[tokio::test]
async fn test_two_errors_in_attachment_order() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let app = with_fixed_id(Router::new().route("/", get(two_errors)), "req-9");
    app.oneshot(get_request("/")).await.unwrap();

    let lines = logs.error_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("error handling request req-9: E1 error_logger_test.rs:"));
    assert!(lines[1].starts_with("error handling request req-9: E2 error_logger_test.rs:"));
}

#[tokio::test]
async fn test_no_errors_no_lines() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let app = with_fixed_id(Router::new().route("/", get(no_errors)), "abc123");
    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(body_string(response).await, "clean");
    assert!(logs.error_lines().is_empty());
}

#[tokio::test]
async fn test_response_passes_through_unchanged() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let app = with_fixed_id(Router::new().route("/", get(teapot)), "abc123");
    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    assert_eq!(body_string(response).await, "short and stout");
    assert_eq!(logs.error_lines().len(), 1);
}

#[tokio::test]
async fn test_request_taking_attach_records_handler_line() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let app = with_fixed_id(Router::new().route("/", get(raw_attach)), "raw-1");
    let response = app.oneshot(get_request("/")).await.unwrap();
    let line = body_string(response).await;

    assert_eq!(
        logs.error_lines(),
        vec![format!(
            "error handling request raw-1: raw failure error_logger_test.rs:{}",
            line
        )]
    );
}

#[tokio::test]
async fn test_attach_without_middleware_is_noop() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let app = Router::new().route("/", get(raw_attach));
    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(logs.error_lines().is_empty());

    let warnings: Vec<String> = logs
        .all()
        .into_iter()
        .filter(|line| line.level == Level::WARN)
        .map(|line| line.message)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_contains!(warnings[0], "outside the error logger middleware");
}

#[tokio::test]
async fn test_try_attach_reports_missing_collector() {
    let app = Router::new().route("/", get(checked_attach));
    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(body_string(response).await, "missing");

    let app = with_fixed_id(Router::new().route("/", get(checked_attach)), "abc123");
    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(body_string(response).await, "attached");
}

#[tokio::test]
async fn test_extractor_without_middleware_rejects() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let app = Router::new().route("/", get(db_timeout));
    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert_contains!(body, "no error collector");
    assert!(logs.error_lines().is_empty());
}

#[tokio::test]
async fn test_collector_is_one_instance_per_request() {
    let app = with_fixed_id(Router::new().route("/", get(same_collector)), "abc123");
    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(body_string(response).await, "true 2");
}

#[tokio::test]
async fn test_concurrent_requests_have_disjoint_collectors() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let app = with_header_id(Router::new().route("/{name}", get(named_error)));

    let (a, b) = tokio::join!(
        app.clone().oneshot(get_with_id("/alpha", "req-a")),
        app.clone().oneshot(get_with_id("/beta", "req-b")),
    );
    assert_eq!(a.unwrap().status(), StatusCode::OK);
    assert_eq!(b.unwrap().status(), StatusCode::OK);

    let lines = logs.error_lines();
    assert_eq!(lines.len(), 2);

    let for_a: Vec<&String> = lines.iter().filter(|l| l.contains("request req-a:")).collect();
    let for_b: Vec<&String> = lines.iter().filter(|l| l.contains("request req-b:")).collect();
    assert_eq!(for_a.len(), 1);
    assert_eq!(for_b.len(), 1);
    assert_contains!(for_a[0], "failure from alpha");
    assert_not_contains!(for_a[0], "beta");
    assert_contains!(for_b[0], "failure from beta");
    assert_not_contains!(for_b[0], "alpha");
}

#[tokio::test]
async fn test_missing_request_id_logs_empty_id() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let app = with_header_id(Router::new().route("/", get(two_errors)));
    app.oneshot(get_request("/")).await.unwrap();

    let lines = logs.error_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("error handling request : E1 "));
}

#[tokio::test]
async fn test_non_utf8_request_id_is_not_dropped() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let request = Request::builder()
        .uri("/")
        .header("x-request-id", HeaderValue::from_bytes(b"id-\xe9").unwrap())
        .body(Body::empty())
        .unwrap();

    let app = with_header_id(Router::new().route("/", get(two_errors)));
    app.oneshot(request).await.unwrap();

    let lines = logs.error_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("error handling request id-\u{fffd}: E1 "));
}
