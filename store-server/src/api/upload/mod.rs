//! Image upload endpoint

mod handler;

use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/upload",
        Router::new()
            .route("/", post(handler::upload_image))
            .layer(DefaultBodyLimit::max(handler::MAX_UPLOAD_BYTES + 1024)),
    )
}
