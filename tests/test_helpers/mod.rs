//! Shared HTTP helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use eyre::WrapErr;
use serde_json::Value;
use todo_service::http::build_router;
use todo_service::todo::{adapters::memory::InMemoryTodoRepository, services::TodoService};
use tower::ServiceExt;

/// Largest response body the helpers will buffer.
const BODY_LIMIT: usize = 64 * 1024;

/// Decoded response: status, headers, and JSON body (`Null` when empty).
pub struct TestResponse {
    /// Response status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Parsed JSON body.
    pub body: Value,
}

/// Builds the full application router over an empty in-memory repository.
pub fn in_memory_app() -> Router {
    build_router(TodoService::new(Arc::new(InMemoryTodoRepository::new())))
}

/// Sends a request with an optional JSON body.
///
/// # Errors
///
/// Returns an error if the request cannot be built or the response body is
/// not valid JSON.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<TestResponse, eyre::Report> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .wrap_err("build request")?;
    send_request(router, request).await
}

/// Sends a prebuilt request.
///
/// # Errors
///
/// Returns an error if the response body cannot be read or is not JSON.
pub async fn send_request(
    router: &Router,
    request: Request<Body>,
) -> Result<TestResponse, eyre::Report> {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .wrap_err("dispatch request")?;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .wrap_err("read response body")?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).wrap_err("parse response body")?
    };
    Ok(TestResponse {
        status,
        headers,
        body,
    })
}
