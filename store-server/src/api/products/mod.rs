//! Product catalog endpoints
//!
//! Reads are public, mutations require the admin session.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/products",
        Router::new()
            .route("/", get(handler::list).post(handler::create))
            .route(
                "/{id}",
                get(handler::get_one)
                    .put(handler::update)
                    .patch(handler::partial_update)
                    .delete(handler::remove),
            )
            .route("/bulk-delete", post(handler::bulk_delete)),
    )
}
