use axum::{Json, extract::State};
use serde::Serialize;
use shared::models::{SiteConfig, SiteConfigUpdate};

use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/config — creates the row with defaults on first read
pub async fn get_config(State(state): State<ServerState>) -> AppResult<Json<SiteConfig>> {
    let config = repository::site_config::get_or_create(&state.pool).await?;
    Ok(Json(config))
}

/// PUT /api/config
pub async fn update_config(
    State(state): State<ServerState>,
    Json(payload): Json<SiteConfigUpdate>,
) -> AppResult<Json<MessageResponse>> {
    if payload.store_name.trim().is_empty() {
        return Err(AppError::validation("el nombre de la tienda es requerido"));
    }
    repository::site_config::update(&state.pool, &payload).await?;
    Ok(Json(MessageResponse {
        message: "Configuración actualizada correctamente".to_string(),
    }))
}
