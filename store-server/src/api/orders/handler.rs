use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use shared::models::{Order, OrderCreate, OrderFieldsUpdate, OrderStatus, OrderSummary};

use crate::core::ServerState;
use crate::db::repository::{self, order::OrderFilter};
use crate::orders;
use crate::utils::{AppError, AppResult};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<OrderSummary>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// GET /api/orders
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ListResponse>> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let status = match params.status.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(OrderStatus::parse(raw)?),
        None => None,
    };

    let filter = OrderFilter {
        status,
        search: params.search,
        limit,
        offset: (page - 1) * limit,
    };

    let (data, total) = repository::order::list(&state.pool, &filter).await?;
    Ok(Json(ListResponse {
        data,
        total,
        page,
        limit,
    }))
}

/// GET /api/orders/{id}
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = repository::order::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("pedido {id} no encontrado")))?;
    Ok(Json(order))
}

/// POST /api/orders
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = orders::create_order(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// PATCH /api/orders/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<MessageResponse>> {
    let status = OrderStatus::parse(&payload.status)?;
    orders::set_status(&state.pool, id, status).await?;
    Ok(Json(MessageResponse {
        message: "Estado actualizado correctamente".to_string(),
    }))
}

/// PUT /api/orders/{id}
pub async fn update_fields(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderFieldsUpdate>,
) -> AppResult<Json<MessageResponse>> {
    orders::update_order_fields(&state.pool, id, &payload).await?;
    Ok(Json(MessageResponse {
        message: "Pedido actualizado correctamente".to_string(),
    }))
}

/// DELETE /api/orders/{id}
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    orders::delete_order(&state.pool, id).await?;
    Ok(Json(MessageResponse {
        message: "Pedido eliminado correctamente".to_string(),
    }))
}
