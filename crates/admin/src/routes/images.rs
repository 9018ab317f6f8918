//! Image upload and delete handlers.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use crate::cloudinary::UploadedImage;
use crate::error::{AppError, Result};
use crate::middleware::auth::RequireAdminAuth;
use crate::state::AppState;

/// Maximum accepted upload size (8 MiB).
const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// POST /api/images/upload
///
/// Accepts a multipart form with a single `file` part and forwards it to
/// Cloudinary through the unsigned preset.
#[instrument(skip_all)]
pub async fn upload(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadedImage>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        if let Some(content_type) = field.content_type()
            && !content_type.starts_with("image/")
        {
            return Err(AppError::BadRequest(format!(
                "Unsupported content type: {content_type}"
            )));
        }

        let filename = field
            .file_name()
            .unwrap_or("upload")
            .to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::BadRequest(format!(
                "File too large (max {MAX_UPLOAD_BYTES} bytes)"
            )));
        }

        let uploaded = state
            .cloudinary()
            .upload(filename, bytes.to_vec())
            .await?;
        return Ok((StatusCode::CREATED, Json(uploaded)));
    }

    Err(AppError::BadRequest(
        "Multipart body must contain a 'file' part".to_string(),
    ))
}

#[derive(Debug, Deserialize)]
pub struct DeletePayload {
    pub public_id: String,
}

/// POST /api/images/delete
#[instrument(skip(state))]
pub async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<DeletePayload>,
) -> Result<Json<Value>> {
    if payload.public_id.trim().is_empty() {
        return Err(AppError::BadRequest("public_id is required".to_string()));
    }

    state.cloudinary().destroy(payload.public_id.trim()).await?;
    Ok(Json(json!({ "success": true })))
}
