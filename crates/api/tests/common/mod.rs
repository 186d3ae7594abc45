#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use directory_api::config::{LogFormat, ServerConfig, ValidationMode};
use directory_api::router::build_app_router;
use directory_api::state::AppState;
use directory_core::schema::FieldSchema;
use directory_db::{seed, InMemoryUserStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(validation_mode: ValidationMode) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        validation_mode,
        field_schema_path: None,
        seed_demo_users: true,
        log_format: LogFormat::Pretty,
    }
}

/// Full application router over a freshly seeded store (users "1" and "2"),
/// validating with the full field schema.
pub fn build_test_app() -> Router {
    build_test_app_with_mode(ValidationMode::Schema)
}

pub fn build_test_app_with_mode(validation_mode: ValidationMode) -> Router {
    let config = test_config(validation_mode);
    let store = InMemoryUserStore::with_users(seed::demo_users(chrono::Utc::now())).unwrap();

    let state = AppState {
        store: Arc::new(store),
        schema: Arc::new(FieldSchema::user_default()),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::PUT, uri, body.to_string()).await
}

/// Send `body` verbatim with a JSON content type.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A payload that passes the full field schema.
pub fn valid_user_json() -> serde_json::Value {
    serde_json::json!({
        "firstName": "Bo",
        "lastName": "Lee",
        "email": "bo@x.com",
        "phone": "555-000-1111",
        "role": "guest"
    })
}
