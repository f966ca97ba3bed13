//! HTTP server assembly and lifecycle

use axum::{Router, extract::Request, middleware, middleware::Next, response::Response};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::auth::require_auth;
use crate::core::{Config, ServerState};
use crate::utils::AppError;

/// Access log middleware
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());
    response
}

/// Assemble the full application router.
///
/// Layer order matters: auth runs inside CORS so preflight responses
/// carry the CORS headers, and the access log wraps everything.
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .merge(api::health::router())
        .merge(api::files::router())
        .merge(api::auth::router())
        .merge(api::products::router())
        .merge(api::orders::router())
        .merge(api::carousel::router())
        .merge(api::config::router())
        .merge(api::user::router())
        .merge(api::upload::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// HTTP server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Initialize state, bind and serve until ctrl-c.
    pub async fn run(self) -> Result<(), AppError> {
        let port = self.config.http_port;
        let state = ServerState::initialize(self.config).await?;
        let app = build_app(state);

        let addr = format!("0.0.0.0:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
        tracing::info!("HTTP server listening on {addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}
