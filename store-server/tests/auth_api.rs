//! Login, route protection and admin account management.

mod common;

use common::{ADMIN_PASSWORD, login, request, spawn_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn login_returns_token_and_user_without_hash() {
    let mut t = spawn_app().await;
    let (status, body) = request(
        &mut t.app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "admin", "password": ADMIN_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login exitoso");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "admin");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() {
    let mut t = spawn_app().await;

    for payload in [
        json!({ "username": "admin", "password": "wrong" }),
        json!({ "username": "nobody", "password": ADMIN_PASSWORD }),
    ] {
        let (status, body) =
            request(&mut t.app, "POST", "/api/auth/login", None, Some(payload)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Credenciales inválidas");
    }
}

#[tokio::test]
async fn protected_routes_require_token() {
    let mut t = spawn_app().await;

    let cases = [
        ("POST", "/api/products"),
        ("DELETE", "/api/products/1"),
        ("GET", "/api/orders"),
        ("POST", "/api/orders"),
        ("PUT", "/api/config"),
        ("GET", "/api/user/profile"),
        ("POST", "/api/upload"),
        ("DELETE", "/api/carousel-slides/1"),
    ];
    for (method, uri) in cases {
        let (status, body) = request(&mut t.app, method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}: {body}");
        assert_eq!(body["code"], "E3001");
    }

    // garbage token
    let (status, body) = request(&mut t.app, "GET", "/api/orders", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3002");
}

#[tokio::test]
async fn public_routes_work_without_token() {
    let mut t = spawn_app().await;

    for uri in [
        "/health",
        "/api/products",
        "/api/carousel-slides",
        "/api/config",
    ] {
        let (status, body) = request(&mut t.app, "GET", uri, None, None).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}: {body}");
    }
}

#[tokio::test]
async fn profile_email_and_password_lifecycle() {
    let mut t = spawn_app().await;
    let token = login(&mut t.app).await;

    let (status, body) = request(&mut t.app, "GET", "/api/user/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "admin");
    assert!(body["user"]["email"].is_null());

    // invalid email rejected
    let (status, _) = request(
        &mut t.app,
        "PUT",
        "/api/user/email",
        Some(&token),
        Some(json!({ "email": "not-an-email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = request(
        &mut t.app,
        "PUT",
        "/api/user/email",
        Some(&token),
        Some(json!({ "email": "admin@tienda.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "admin@tienda.com");

    // wrong current password
    let (status, _) = request(
        &mut t.app,
        "PUT",
        "/api/user/password",
        Some(&token),
        Some(json!({ "current_password": "nope", "new_password": "nuevaclave" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // too-short new password
    let (status, _) = request(
        &mut t.app,
        "PUT",
        "/api/user/password",
        Some(&token),
        Some(json!({ "current_password": ADMIN_PASSWORD, "new_password": "12345" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &mut t.app,
        "PUT",
        "/api/user/password",
        Some(&token),
        Some(json!({ "current_password": ADMIN_PASSWORD, "new_password": "nuevaclave" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // old password no longer works, new one does
    let (status, _) = request(
        &mut t.app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "admin", "password": ADMIN_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        &mut t.app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "nuevaclave" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
