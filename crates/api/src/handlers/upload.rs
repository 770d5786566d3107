//! Image upload, deletion and presigned download links.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Query, State};
use axum::Json;
use portfolio_core::upload::{is_image_content_type, key_from_url, unique_file_name};
use portfolio_storage::PRESIGN_EXPIRY;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppJson, AppResult};
use crate::handlers::MessageResponse;
use crate::middleware::auth::AdminSession;
use crate::query::PresignParams;
use crate::state::AppState;

/// A file read from the `file` multipart field.
struct UploadedFile {
    name: String,
    content_type: String,
    data: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/upload
///
/// Store an image under a generated unique key and return its public URL.
pub async fn upload(
    _session: AdminSession,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        file = Some(UploadedFile {
            name,
            content_type,
            data: data.to_vec(),
        });
    }

    let file = file.ok_or_else(|| AppError::BadRequest("No file provided".into()))?;
    if !is_image_content_type(&file.content_type) {
        return Err(AppError::BadRequest("Only image files are allowed".into()));
    }

    let now_millis = chrono::Utc::now().timestamp_millis();
    let key = unique_file_name(&file.name, now_millis, &mut rand::rng());
    let size = file.data.len();

    let url = state
        .storage()?
        .put(&key, file.data, &file.content_type)
        .await?;
    tracing::info!(key = %key, size, original = %file.name, "Image uploaded");
    Ok(Json(UploadResponse { url }))
}

/// Body of `DELETE /api/upload`: either the public URL or the raw key.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteUploadRequest {
    pub url: Option<String>,
    pub key: Option<String>,
}

impl DeleteUploadRequest {
    fn object_key(&self) -> Option<&str> {
        let key = match (&self.key, &self.url) {
            (Some(key), _) if !key.trim().is_empty() => key.trim(),
            (_, Some(url)) => key_from_url(url.trim()),
            _ => "",
        };
        (!key.is_empty()).then_some(key)
    }
}

/// DELETE /api/upload
pub async fn delete(
    _session: AdminSession,
    State(state): State<AppState>,
    AppJson(input): AppJson<DeleteUploadRequest>,
) -> AppResult<Json<MessageResponse>> {
    let key = input
        .object_key()
        .ok_or_else(|| AppError::BadRequest("File URL or key is required".into()))?;
    state.storage()?.delete(key).await?;
    tracing::info!(key, "Image deleted");
    Ok(Json(MessageResponse {
        message: "File deleted successfully",
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignResponse {
    pub url: String,
    /// Seconds until the URL stops working.
    pub expires_in: u64,
}

/// GET /api/upload/presign?key=
pub async fn presign(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<PresignParams>,
) -> AppResult<Json<PresignResponse>> {
    let key = params
        .key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AppError::BadRequest("key is required".into()))?;
    let url = state.storage()?.presigned_get(key, PRESIGN_EXPIRY).await?;
    Ok(Json(PresignResponse {
        url,
        expires_in: PRESIGN_EXPIRY.as_secs(),
    }))
}
