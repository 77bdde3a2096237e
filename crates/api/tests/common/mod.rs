//! Shared test harness for full-stack endpoint tests.
//!
//! Builds the real application router (same middleware stack as the
//! binary) on top of a `#[sqlx::test]`-provisioned pool, and provides
//! small request helpers so individual tests read as scenarios.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use copydesk_api::auth::jwt::JwtConfig;
use copydesk_api::config::ServerConfig;
use copydesk_api::router::build_app_router;
use copydesk_api::state::AppState;
use copydesk_db::repositories::WriterRepo;

/// Fixed test configuration: no environment variables required.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".into()],
        request_timeout_secs: 5,
        jwt: JwtConfig {
            secret: "test-secret-not-for-production".into(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router against the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request through the router and return the status plus parsed
/// JSON body (`Value::Null` when the body is empty).
pub async fn request(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = builder
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(app: &Router, path: &str, token: Option<&str>) -> (StatusCode, Value) {
    request(app, Method::GET, path, token, None).await
}

pub async fn post_json(
    app: &Router,
    path: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    request(app, Method::POST, path, token, Some(body)).await
}

pub async fn put_json(
    app: &Router,
    path: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    request(app, Method::PUT, path, token, Some(body)).await
}

/// Register a writer account through the API. Returns the parsed
/// registration response body.
pub async fn register_writer(app: &Router, username: &str, name: &str) -> Value {
    let (status, body) = post_json(
        app,
        "/api/v1/auth/register",
        None,
        json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "name": name,
            "password": "correct-horse-battery",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    body
}

/// Log in and return the access token.
pub async fn login(app: &Router, username: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/v1/auth/login",
        None,
        json!({
            "username": username,
            "password": "correct-horse-battery",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["data"]["access_token"].as_str().unwrap().to_string()
}

/// Register a writer and log in. Returns `(token, writer_id)`.
pub async fn signup(app: &Router, username: &str, name: &str) -> (String, i64) {
    let body = register_writer(app, username, name).await;
    let writer_id = body["data"]["id"].as_i64().unwrap();
    let token = login(app, username).await;
    (token, writer_id)
}

/// Register a writer, promote them to editor, and log in so the token
/// carries the editor role. Returns `(token, writer_id)`.
pub async fn signup_editor(
    app: &Router,
    pool: &PgPool,
    username: &str,
    name: &str,
) -> (String, i64) {
    let body = register_writer(app, username, name).await;
    let writer_id = body["data"]["id"].as_i64().unwrap();
    WriterRepo::set_editor(pool, writer_id, true)
        .await
        .expect("failed to promote writer to editor");
    let token = login(app, username).await;
    (token, writer_id)
}
