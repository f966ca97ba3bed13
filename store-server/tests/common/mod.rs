//! Shared integration test harness: a fully initialized app over a
//! throwaway work directory, driven through `tower::Service`.

// not every test binary uses every helper
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::Service;

use store_server::core::{Config, ServerState, build_app};

pub const ADMIN_PASSWORD: &str = "admin123";

pub struct TestApp {
    pub app: Router,
    _work_dir: tempfile::TempDir,
}

pub async fn spawn_app() -> TestApp {
    let work_dir = tempfile::tempdir().expect("failed to create temp work dir");
    let mut config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    config.admin_password = ADMIN_PASSWORD.to_string();

    let state = ServerState::initialize(config)
        .await
        .expect("failed to initialize server state");

    TestApp {
        app: build_app(state),
        _work_dir: work_dir,
    }
}

pub async fn request(
    app: &mut Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("failed to build request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    };

    let response = app.call(request).await.expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub async fn login(app: &mut Router) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "admin", "password": ADMIN_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"]
        .as_str()
        .expect("login response missing token")
        .to_string()
}

/// Create a product and return its id.
pub async fn create_product(app: &mut Router, token: &str, nombre: &str, stock: i64) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/api/products",
        Some(token),
        Some(json!({
            "nombre": nombre,
            "categoria": "remeras",
            "precio": 1500.0,
            "stock": stock
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "product create failed: {body}");
    body["id"].as_i64().expect("product response missing id")
}

pub async fn product_stock(app: &mut Router, id: i64) -> i64 {
    let (status, body) = request(app, "GET", &format!("/api/products/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK, "product fetch failed: {body}");
    body["stock"].as_i64().expect("product missing stock")
}
