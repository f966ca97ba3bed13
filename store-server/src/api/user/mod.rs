//! Admin account endpoints

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/user",
        Router::new()
            .route("/profile", get(handler::profile))
            .route("/email", put(handler::update_email))
            .route("/password", put(handler::update_password)),
    )
}
