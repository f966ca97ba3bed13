use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use shared::models::{CarouselSlide, CarouselSlideCreate, CarouselSlideUpdate};

use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub slides: Vec<CarouselSlide>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/carousel-slides — active slides in display order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ListResponse>> {
    let slides = repository::carousel::list_active(&state.pool).await?;
    let total = slides.len();
    Ok(Json(ListResponse { slides, total }))
}

/// GET /api/carousel-slides/{id}
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CarouselSlide>> {
    let slide = repository::carousel::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("slide {id} no encontrado")))?;
    Ok(Json(slide))
}

/// POST /api/carousel-slides
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CarouselSlideCreate>,
) -> AppResult<(StatusCode, Json<CarouselSlide>)> {
    payload.validate()?;
    let slide = repository::carousel::create(&state.pool, payload).await?;
    tracing::info!(id = slide.id, "carousel slide created");
    Ok((StatusCode::CREATED, Json(slide)))
}

/// PUT /api/carousel-slides/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CarouselSlideUpdate>,
) -> AppResult<Json<CarouselSlide>> {
    payload.validate()?;
    let slide = repository::carousel::update(&state.pool, id, payload).await?;
    Ok(Json(slide))
}

/// DELETE /api/carousel-slides/{id}
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    repository::carousel::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse {
        message: "Slide eliminado correctamente".to_string(),
    }))
}
