use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use shared::models::{Product, ProductCreate, ProductPatch, ProductUpdate};

use crate::core::ServerState;
use crate::db::repository::{self, product::ProductQuery};
use crate::utils::{AppError, AppResult};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub category: Option<String>,
    pub gender: Option<String>,
    pub sizes: Option<String>,
    pub temporada: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub products: Vec<Product>,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

fn split_csv(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// GET /api/products
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ListResponse>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let query = ProductQuery {
        categories: split_csv(params.category),
        genders: split_csv(params.gender),
        sizes: split_csv(params.sizes),
        temporadas: split_csv(params.temporada),
        search: params.search,
        sort: params.sort,
        limit,
        offset,
    };

    let (products, total) = repository::product::query(&state.pool, &query).await?;
    let total_pages = (total + limit - 1) / limit;

    Ok(Json(ListResponse {
        products,
        total,
        total_pages,
    }))
}

/// GET /api/products/{id}
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = repository::product::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("producto {id} no encontrado")))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    payload.validate()?;
    let product = repository::product::create(&state.pool, payload).await?;
    tracing::info!(id = product.id, nombre = %product.nombre, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    payload.validate()?;
    let product = repository::product::update(&state.pool, id, payload).await?;
    Ok(Json(product))
}

/// PATCH /api/products/{id}
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPatch>,
) -> AppResult<Json<Product>> {
    payload.validate()?;
    let product = repository::product::partial_update(&state.pool, id, payload).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn remove(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    repository::product::delete(&state.pool, id).await?;
    tracing::info!(id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}

/// POST /api/products/bulk-delete
pub async fn bulk_delete(
    State(state): State<ServerState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> AppResult<StatusCode> {
    if payload.ids.is_empty() {
        return Err(AppError::validation("la lista de ids no puede estar vacía"));
    }
    let deleted = repository::product::bulk_delete(&state.pool, &payload.ids).await?;
    tracing::info!(deleted, "products bulk-deleted");
    Ok(StatusCode::NO_CONTENT)
}
