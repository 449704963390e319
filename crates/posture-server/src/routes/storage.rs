use axum::Json;
use posture_core::storage;

use crate::error::AppError;

#[derive(serde::Deserialize)]
pub struct ExtractKeyBody {
    pub input: String,
}

/// POST /api/storage/extract-key — normalize an attachment reference (S3 URL
/// or bare key) into the object key, rejecting anything malformed.
pub async fn extract_key(
    Json(body): Json<ExtractKeyBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let key = storage::extract_object_key(&body.input)?;
    Ok(Json(serde_json::json!({ "key": key })))
}
