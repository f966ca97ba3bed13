//! Order endpoints
//!
//! The whole surface is admin-only. Stock side effects live in
//! [`crate::orders`].

mod handler;

use axum::{Router, routing::get, routing::patch};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/orders",
        Router::new()
            .route("/", get(handler::list).post(handler::create))
            .route(
                "/{id}",
                get(handler::get_one)
                    .put(handler::update_fields)
                    .delete(handler::remove),
            )
            .route("/{id}/status", patch(handler::update_status)),
    )
}
