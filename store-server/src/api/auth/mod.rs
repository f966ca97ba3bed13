//! Authentication endpoints

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/auth",
        Router::new().route("/login", post(handler::login)),
    )
}
