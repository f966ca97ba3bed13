//! Static file serving for uploaded images

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/uploads/{*path}", get(serve_upload))
}

/// GET /uploads/{*path}
///
/// Serves files under the work dir's uploads tree. Traversal segments
/// are rejected before touching the filesystem.
async fn serve_upload(State(state): State<ServerState>, Path(path): Path<String>) -> Response {
    if path.split('/').any(|seg| seg == ".." || seg.is_empty()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let file = std::path::PathBuf::from(&state.config.work_dir)
        .join("uploads")
        .join(&path);

    match tokio::fs::read(&file).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&file).first_or_octet_stream();
            let content_type = HeaderValue::from_str(mime.as_ref())
                .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
