//! Carousel slide endpoints
//!
//! The list and single reads are public, the rest is admin-only.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/carousel-slides",
        Router::new()
            .route("/", get(handler::list).post(handler::create))
            .route(
                "/{id}",
                get(handler::get_one)
                    .put(handler::update)
                    .delete(handler::remove),
            ),
    )
}
