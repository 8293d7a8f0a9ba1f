//! Shared helpers for server integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use friendgraph_server::{build_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router around a fresh, empty store.
pub fn create_test_app() -> Router {
    build_router(Arc::new(AppState::default()))
}

/// Send one request and return the status and body text.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("Content-Type", "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"))
}

/// Send one request and parse the body as JSON.
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let (status, text) = send(app, method, uri, body).await;
    let json = serde_json::from_str(&text).expect("Invalid JSON");
    (status, json)
}

/// Create a user through the API and return its ID.
pub async fn create_user(app: &Router, name: &str, age: i64) -> i64 {
    let body = serde_json::json!({ "name": name, "age": age }).to_string();
    let (status, json) = send_json(app, "POST", "/create", Some(&body)).await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_i64().expect("id should be an integer")
}
