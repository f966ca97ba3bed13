use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::User;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
}

/// GET /api/user/profile
pub async fn profile(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<ProfileResponse>> {
    let user = repository::user::find_by_id(&state.pool, current.id)
        .await?
        .ok_or_else(|| AppError::not_found("usuario no encontrado"))?;
    Ok(Json(ProfileResponse { user }))
}

#[derive(Debug, Deserialize)]
pub struct EmailUpdateRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct EmailUpdateResponse {
    pub message: String,
    pub email: String,
}

/// PUT /api/user/email
pub async fn update_email(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<EmailUpdateRequest>,
) -> AppResult<Json<EmailUpdateResponse>> {
    let email = payload.email.trim().to_string();
    User::validate_email(&email)?;
    repository::user::update_email(&state.pool, current.id, &email).await?;
    Ok(Json(EmailUpdateResponse {
        message: "Email actualizado exitosamente".to_string(),
        email,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PasswordUpdateRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// PUT /api/user/password
pub async fn update_password(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<PasswordUpdateRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user = repository::user::find_by_id(&state.pool, current.id)
        .await?
        .ok_or_else(|| AppError::not_found("usuario no encontrado"))?;

    let valid = user
        .verify_password(&payload.current_password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !valid {
        return Err(AppError::validation("la contraseña actual es incorrecta"));
    }

    User::validate_new_password(&payload.new_password)?;
    let hash = User::hash_password(&payload.new_password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
    repository::user::update_password(&state.pool, current.id, &hash).await?;

    tracing::info!(target: "security", user_id = current.id, "password changed");
    Ok(Json(MessageResponse {
        message: "Contraseña actualizada exitosamente".to_string(),
    }))
}
