//! Malformed input tests for the todo API.

use crate::test_helpers::{in_memory_app, send, send_request};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(json!({}))]
#[case(json!({"completed": true}))]
#[case(json!({"task": 12}))]
#[case(json!({"task": "buy milk", "completed": "yes"}))]
#[case(json!({"task": null}))]
#[tokio::test(flavor = "multi_thread")]
async fn add_rejects_malformed_body(#[case] body: serde_json::Value) {
    let app = in_memory_app();

    let response = send(&app, Method::POST, "/addtodo", Some(body))
        .await
        .expect("request should be answered");
    let listed = send(&app, Method::GET, "/todos", None)
        .await
        .expect("list request should succeed");

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["detail"].is_string());
    assert_eq!(listed.body, json!([]));
}

#[rstest]
#[case(json!({}))]
#[case(json!({"completed": "true"}))]
#[case(json!({"completed": null}))]
#[tokio::test(flavor = "multi_thread")]
async fn complete_rejects_malformed_body(#[case] body: serde_json::Value) {
    let app = in_memory_app();
    send(&app, Method::POST, "/addtodo", Some(json!({"task": "buy milk"})))
        .await
        .expect("add request should succeed");

    let response = send(&app, Method::PUT, "/todos/1/complete", Some(body))
        .await
        .expect("request should be answered");

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_rejects_invalid_json_syntax() {
    let app = in_memory_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/addtodo")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"task\": "))
        .expect("request should build");

    let response = send_request(&app, request)
        .await
        .expect("request should be answered");

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_rejects_missing_content_type() {
    let app = in_memory_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/addtodo")
        .body(Body::from(json!({"task": "buy milk"}).to_string()))
        .expect("request should build");

    let response = send_request(&app, request)
        .await
        .expect("request should be answered");

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[case(Method::DELETE, "/deletetodo/abc", None)]
#[case(Method::PUT, "/todos/first/complete", Some(json!({"completed": true})))]
#[tokio::test(flavor = "multi_thread")]
async fn non_integer_identifier_is_rejected(
    #[case] method: Method,
    #[case] uri: &str,
    #[case] body: Option<serde_json::Value>,
) {
    let app = in_memory_app();

    let response = send(&app, method, uri, body)
        .await
        .expect("request should be answered");

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}
