//! Carousel slides and site configuration.

mod common;

use common::{login, request, spawn_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn seeded_slides_are_listed_in_order() {
    let mut t = spawn_app().await;
    let (status, body) = request(&mut t.app, "GET", "/api/carousel-slides", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    let slides = body["slides"].as_array().unwrap();
    let ordenes: Vec<i64> = slides.iter().map(|s| s["orden"].as_i64().unwrap()).collect();
    assert_eq!(ordenes, vec![1, 2, 3]);
    assert_eq!(slides[0]["titulo"], "Chaquetas para el Hombre Moderno");
}

#[tokio::test]
async fn slide_crud_and_inactive_slides_are_hidden() {
    let mut t = spawn_app().await;
    let token = login(&mut t.app).await;

    let (status, slide) = request(
        &mut t.app,
        "POST",
        "/api/carousel-slides",
        Some(&token),
        Some(json!({
            "titulo": "Liquidación",
            "imagen_url": "/uploads/images/liq.jpg",
            "orden": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(slide["activo"], true);
    assert_eq!(slide["position_y"], 50);
    let id = slide["id"].as_i64().unwrap();

    // blank image rejected
    let (status, _) = request(
        &mut t.app,
        "POST",
        "/api/carousel-slides",
        Some(&token),
        Some(json!({ "imagen_url": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = request(
        &mut t.app,
        "PUT",
        &format!("/api/carousel-slides/{id}"),
        Some(&token),
        Some(json!({ "titulo": "Liquidación Final", "activo": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["titulo"], "Liquidación Final");
    assert_eq!(updated["activo"], false);
    assert_eq!(updated["imagen_url"], "/uploads/images/liq.jpg");

    // hidden from the public list, still fetchable by id
    let (_, body) = request(&mut t.app, "GET", "/api/carousel-slides", None, None).await;
    assert_eq!(body["total"], 3);
    let (status, _) = request(
        &mut t.app,
        "GET",
        &format!("/api/carousel-slides/{id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(
        &mut t.app,
        "DELETE",
        &format!("/api/carousel-slides/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Slide eliminado correctamente");

    let (status, _) = request(
        &mut t.app,
        "GET",
        &format!("/api/carousel-slides/{id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn config_is_created_with_defaults_and_updates() {
    let mut t = spawn_app().await;
    let token = login(&mut t.app).await;

    let (status, config) = request(&mut t.app, "GET", "/api/config", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(config["store_name"], "Cerro Sneakers");
    assert_eq!(config["credit_card_surcharge"].as_f64().unwrap(), 15.0);
    assert_eq!(config["low_stock_threshold"], 5);

    let (status, body) = request(
        &mut t.app,
        "PUT",
        "/api/config",
        Some(&token),
        Some(json!({
            "store_name": "Cerro Outlet",
            "whatsapp_number": "5491100000000",
            "credit_card_surcharge": 10.0,
            "low_stock_threshold": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Configuración actualizada correctamente");

    let (_, config) = request(&mut t.app, "GET", "/api/config", None, None).await;
    assert_eq!(config["store_name"], "Cerro Outlet");
    assert_eq!(config["low_stock_threshold"], 3);

    // blank store name rejected
    let (status, _) = request(
        &mut t.app,
        "PUT",
        "/api/config",
        Some(&token),
        Some(json!({ "store_name": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn uploads_path_rejects_traversal_and_missing_files() {
    let mut t = spawn_app().await;

    let (status, _) = request(&mut t.app, "GET", "/uploads/images/missing.jpg", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(&mut t.app, "GET", "/uploads/../Cargo.toml", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
