use axum::Json;
use posture_core::score::ComplianceScore;

use crate::error::AppError;

#[derive(serde::Deserialize)]
pub struct BadgeBody {
    pub score: ComplianceScore,
}

/// POST /api/badge — badge label/severity plus inline color for a score.
pub async fn badge(Json(body): Json<BadgeBody>) -> Result<Json<serde_json::Value>, AppError> {
    let badge = body.score.badge();
    Ok(Json(serde_json::json!({
        "score": body.score,
        "label": badge.label,
        "severity": badge.severity,
        "color": body.score.color(),
    })))
}
