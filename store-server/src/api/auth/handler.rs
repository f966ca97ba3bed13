use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::User;

use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    pub message: String,
}

/// POST /api/auth/login
///
/// Failures are indistinguishable between unknown username and wrong
/// password.
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = repository::user::find_by_username(&state.pool, &payload.username)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    let valid = user
        .verify_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !valid {
        tracing::warn!(target: "security", username = %payload.username, "failed login attempt");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(target: "security", username = %user.username, "login ok");
    Ok(Json(LoginResponse {
        token,
        user,
        message: "Login exitoso".to_string(),
    }))
}
