use axum::{
    Json,
    extract::{Multipart, State},
};
use image::codecs::jpeg::JpegEncoder;
use serde::Serialize;
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];
const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
    pub size: u64,
}

/// POST /api/upload
///
/// Accepts a `file` multipart field, verifies it decodes as an image
/// and re-encodes it as JPEG under a fresh UUID name. Re-encoding
/// strips metadata and anything hiding behind a fake extension.
pub async fn upload_image(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let extension = std::path::Path::new(&original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::validation(
                "formato de imagen no soportado (jpg, jpeg, png, webp)",
            ));
        }

        let data = field.bytes().await?;
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::validation("la imagen no puede superar los 5MB"));
        }

        let decoded = image::load_from_memory(&data)
            .map_err(|_| AppError::validation("el archivo no es una imagen válida"))?;
        let rgb = decoded.to_rgb8();

        let mut encoded: Vec<u8> = Vec::new();
        JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
            .encode_image(&rgb)
            .map_err(|e| AppError::internal(format!("Image encoding failed: {e}")))?;

        let filename = format!("{}.jpg", Uuid::new_v4());
        let dest = state.uploads_dir().join(&filename);
        tokio::fs::write(&dest, &encoded)
            .await
            .map_err(|e| AppError::internal(format!("Failed to save image: {e}")))?;

        let size = encoded.len() as u64;
        tracing::info!(%filename, size, "image uploaded");
        return Ok(Json(UploadResponse {
            url: format!("/uploads/images/{filename}"),
            filename,
            size,
        }));
    }

    Err(AppError::validation("falta el campo 'file'"))
}
