//! HTTP API integration tests, driven against the in-process router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use listsync_server::codec;
use listsync_server::server::build_app;
use listsync_server::state::AppState;
use serde_json::Value;
use tower::util::ServiceExt;

fn app() -> Router {
    build_app(AppState::new())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn strings_returns_the_seed_data() {
    let app = app();
    let (status, body) = send(&app, get("/api/strings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(["Hello", "World", "GraphQL"]));
}

#[tokio::test]
async fn added_value_appears_at_the_front() {
    let app = app();
    let (status, body) = send(
        &app,
        json_request("POST", "/api/strings", r#"{"value":"Foo"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(true));

    let (_, body) = send(&app, get("/api/strings")).await;
    assert_eq!(body, serde_json::json!(["Foo", "Hello", "World", "GraphQL"]));
}

#[tokio::test]
async fn blank_value_is_rejected_at_the_boundary() {
    let app = app();
    let (status, _) = send(
        &app,
        json_request("POST", "/api/strings", r#"{"value":"   "}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // List untouched
    let (_, body) = send(&app, get("/api/strings")).await;
    assert_eq!(body, serde_json::json!(["Hello", "World", "GraphQL"]));
}

#[tokio::test]
async fn update_overwrites_in_place_and_rejects_bad_indices() {
    let app = app();
    let (status, body) = send(
        &app,
        json_request("PUT", "/api/strings/1", r#"{"value":"Bar"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(true));

    let (_, body) = send(&app, get("/api/strings")).await;
    assert_eq!(body, serde_json::json!(["Hello", "Bar", "GraphQL"]));

    let (_, body) = send(
        &app,
        json_request("PUT", "/api/strings/99", r#"{"value":"nope"}"#),
    )
    .await;
    assert_eq!(body, Value::Bool(false));
}

#[tokio::test]
async fn delete_removes_exactly_one_entry() {
    let app = app();
    let (_, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/api/strings/0")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(body, Value::Bool(true));

    let (_, body) = send(&app, get("/api/strings")).await;
    assert_eq!(body, serde_json::json!(["World", "GraphQL"]));

    let (_, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/api/strings/99")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(body, Value::Bool(false));
}

#[tokio::test]
async fn binary_strings_is_an_encoding_of_the_same_list() {
    let app = app();
    let (status, body) = send(&app, get("/api/strings/binary")).await;
    assert_eq!(status, StatusCode::OK);

    let payload = body.as_str().expect("payload is a json string");
    assert_eq!(
        codec::decode(payload).unwrap(),
        vec!["Hello", "World", "GraphQL"]
    );
}
