#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use kol_torah_api::config::ServerConfig;
use kol_torah_api::router::build_app_router;
use kol_torah_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Same builder as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a rabbi through the API and return its id.
pub async fn create_rabbi(pool: &PgPool, slug: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/rabbis/",
        serde_json::json!({
            "name_hebrew": "הרב",
            "name_english": format!("Rabbi {slug}"),
            "slug": slug,
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a series through the API and return its id.
pub async fn create_series(pool: &PgPool, rabbi_id: i64, slug: &str, series_type: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/series/",
        serde_json::json!({
            "rabbi_id": rabbi_id,
            "name_hebrew": "שיעורים",
            "name_english": format!("Series {slug}"),
            "slug": slug,
            "type": series_type,
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
