//! Product catalog CRUD, filtering and pagination.

mod common;

use common::{create_product, login, request, spawn_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_and_fetch_product() {
    let mut t = spawn_app().await;
    let token = login(&mut t.app).await;

    let (status, created) = request(
        &mut t.app,
        "POST",
        "/api/products",
        Some(&token),
        Some(json!({
            "nombre": "Remera Oversize",
            "descripcion": "Algodón peinado",
            "categoria": "remeras",
            "precio": 2500.0,
            "stock": 12,
            "tallas": ["S", "M", "L"],
            "imagenes": ["/uploads/images/a.jpg"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["genero"], "unisex");
    assert_eq!(created["activo"], true);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = request(&mut t.app, "GET", &format!("/api/products/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["nombre"], "Remera Oversize");
    assert_eq!(fetched["tallas"], json!(["S", "M", "L"]));
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let mut t = spawn_app().await;
    let token = login(&mut t.app).await;

    for payload in [
        json!({ "nombre": "  ", "categoria": "remeras", "precio": 100.0 }),
        json!({ "nombre": "Remera", "categoria": "", "precio": 100.0 }),
        json!({ "nombre": "Remera", "categoria": "remeras", "precio": 0.0 }),
        json!({ "nombre": "Remera", "categoria": "remeras", "precio": -5.0 }),
        json!({
            "nombre": "Remera", "categoria": "remeras", "precio": 100.0,
            "imagenes": ["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"]
        }),
    ] {
        let (status, body) =
            request(&mut t.app, "POST", "/api/products", Some(&token), Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted: {body}");
        assert_eq!(body["code"], "E0002");
    }
}

#[tokio::test]
async fn list_filters_sorts_and_paginates() {
    let mut t = spawn_app().await;
    let token = login(&mut t.app).await;

    let items = [
        ("Remera Básica", "remeras", "hombre", 1000.0, vec!["S", "M"]),
        ("Remera Estampada", "remeras", "mujer", 3000.0, vec!["M", "L"]),
        ("Buzo Canguro", "buzos", "unisex", 5000.0, vec!["XL"]),
    ];
    for (nombre, categoria, genero, precio, tallas) in items {
        let (status, _) = request(
            &mut t.app,
            "POST",
            "/api/products",
            Some(&token),
            Some(json!({
                "nombre": nombre,
                "categoria": categoria,
                "genero": genero,
                "precio": precio,
                "stock": 5,
                "tallas": tallas
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // category filter, case-insensitive
    let (status, body) =
        request(&mut t.app, "GET", "/api/products?category=Remeras", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    // gender filter
    let (_, body) = request(&mut t.app, "GET", "/api/products?gender=mujer", None, None).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["nombre"], "Remera Estampada");

    // size filter matches JSON array membership
    let (_, body) = request(&mut t.app, "GET", "/api/products?sizes=XL", None, None).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["nombre"], "Buzo Canguro");

    // search hits name, case-insensitive
    let (_, body) = request(&mut t.app, "GET", "/api/products?search=remera", None, None).await;
    assert_eq!(body["total"], 2);

    // price sort
    let (_, body) = request(&mut t.app, "GET", "/api/products?sort=price_asc", None, None).await;
    assert_eq!(body["products"][0]["nombre"], "Remera Básica");
    let (_, body) = request(&mut t.app, "GET", "/api/products?sort=price_desc", None, None).await;
    assert_eq!(body["products"][0]["nombre"], "Buzo Canguro");

    // pagination and totalPages
    let (_, body) = request(&mut t.app, "GET", "/api/products?limit=2", None, None).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], 3);
    assert_eq!(body["totalPages"], 2);
    let (_, body) = request(&mut t.app, "GET", "/api/products?limit=2&offset=2", None, None).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 1);

}

#[tokio::test]
async fn limit_above_100_is_clamped() {
    let mut t = spawn_app().await;
    let token = login(&mut t.app).await;

    for i in 0..101 {
        create_product(&mut t.app, &token, &format!("Remera {i}"), 1).await;
    }

    let (status, body) = request(&mut t.app, "GET", "/api/products?limit=5000", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().unwrap().len(), 100);
    assert_eq!(body["total"], 101);
    assert_eq!(body["totalPages"], 2);
}

#[tokio::test]
async fn put_replaces_and_patch_merges() {
    let mut t = spawn_app().await;
    let token = login(&mut t.app).await;
    let id = create_product(&mut t.app, &token, "Remera", 10).await;

    let (status, updated) = request(
        &mut t.app,
        "PUT",
        &format!("/api/products/{id}"),
        Some(&token),
        Some(json!({
            "nombre": "Remera Premium",
            "categoria": "remeras",
            "precio": 3200.0,
            "stock": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nombre"], "Remera Premium");
    assert_eq!(updated["stock"], 4);

    let (status, patched) = request(
        &mut t.app,
        "PATCH",
        &format!("/api/products/{id}"),
        Some(&token),
        Some(json!({ "destacado": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["destacado"], true);
    assert_eq!(patched["nombre"], "Remera Premium");

    // empty patch is rejected
    let (status, _) = request(
        &mut t.app,
        "PATCH",
        &format!("/api/products/{id}"),
        Some(&token),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // negative stock is rejected
    let (status, _) = request(
        &mut t.app,
        "PATCH",
        &format!("/api/products/{id}"),
        Some(&token),
        Some(json!({ "stock": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_and_bulk_delete() {
    let mut t = spawn_app().await;
    let token = login(&mut t.app).await;
    let a = create_product(&mut t.app, &token, "A", 1).await;
    let b = create_product(&mut t.app, &token, "B", 1).await;
    let c = create_product(&mut t.app, &token, "C", 1).await;

    let (status, _) = request(
        &mut t.app,
        "DELETE",
        &format!("/api/products/{a}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = request(&mut t.app, "GET", &format!("/api/products/{a}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    let (status, _) = request(
        &mut t.app,
        "POST",
        "/api/products/bulk-delete",
        Some(&token),
        Some(json!({ "ids": [b, c] })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = request(&mut t.app, "GET", "/api/products", None, None).await;
    assert_eq!(body["total"], 0);

    // nothing left to delete
    let (status, _) = request(
        &mut t.app,
        "POST",
        "/api/products/bulk-delete",
        Some(&token),
        Some(json!({ "ids": [b, c] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &mut t.app,
        "POST",
        "/api/products/bulk-delete",
        Some(&token),
        Some(json!({ "ids": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_product_returns_spanish_not_found() {
    let mut t = spawn_app().await;
    let (status, body) = request(&mut t.app, "GET", "/api/products/4242", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "producto 4242 no encontrado");
}
