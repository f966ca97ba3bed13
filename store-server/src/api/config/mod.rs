//! Site configuration endpoints

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/config",
        Router::new().route("/", get(handler::get_config).put(handler::update_config)),
    )
}
