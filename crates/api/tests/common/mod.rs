//! Shared helpers for API integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use playbill_api::config::ServerConfig;
use playbill_api::router::build_app_router;
use playbill_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        session_expiry_days: 7,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through [`build_app_router`] so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// GET `path` with no cookie.
pub async fn get(app: Router, path: &str) -> Response {
    request(app, Method::GET, path, None, None).await
}

/// GET `path` with a `Cookie` header.
pub async fn get_with_cookie(app: Router, path: &str, cookie: &str) -> Response {
    request(app, Method::GET, path, Some(cookie), None).await
}

/// POST a JSON body with no cookie.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    request(app, Method::POST, path, None, Some(body)).await
}

/// POST a JSON body with a `Cookie` header.
pub async fn post_json_with_cookie(
    app: Router,
    path: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response {
    request(app, Method::POST, path, Some(cookie), Some(body)).await
}

/// PATCH a JSON body with a `Cookie` header.
pub async fn patch_json_with_cookie(
    app: Router,
    path: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response {
    request(app, Method::PATCH, path, Some(cookie), Some(body)).await
}

/// DELETE `path` with a `Cookie` header.
pub async fn delete_with_cookie(app: Router, path: &str, cookie: &str) -> Response {
    request(app, Method::DELETE, path, Some(cookie), None).await
}

/// Send one request through the app and return the raw response.
async fn request(
    app: Router,
    method: Method,
    path: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Parse a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract the `session=<token>` pair from a response's `Set-Cookie`
/// header, ready to send back in a `Cookie` header.
pub fn session_cookie_from(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response must set a session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

/// Sign up a fresh account through the API and return its session cookie.
pub async fn signup_session(app: &Router, username: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": "password123" });
    let response = post_json(app.clone(), "/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    session_cookie_from(&response)
}
