use axum::extract::Path;
use axum::Json;
use posture_core::classifier;
use posture_core::snapshot::Snapshot;
use posture_core::summary::{self, FrameworkSummary};

use crate::error::AppError;

/// POST /api/frameworks/{id}/summary — summary for one framework instance in
/// the posted snapshot. 404 when the snapshot has no such instance.
pub async fn framework_summary(
    Path(id): Path<String>,
    Json(snapshot): Json<Snapshot>,
) -> Result<Json<FrameworkSummary>, AppError> {
    let framework = snapshot.framework(&id)?;
    let score = snapshot.score_for(&id);
    Ok(Json(summary::summarize_framework(
        &snapshot, framework, score,
    )))
}

/// POST /api/frameworks/{id}/controls — per-control readiness for one
/// framework instance in the posted snapshot.
pub async fn framework_controls(
    Path(id): Path<String>,
    Json(snapshot): Json<Snapshot>,
) -> Result<Json<serde_json::Value>, AppError> {
    let framework = snapshot.framework(&id)?;
    let classified: Vec<serde_json::Value> = classifier::classify_framework(&snapshot, framework)
        .into_iter()
        .map(|(control, readiness)| {
            serde_json::json!({
                "control_id": control.id,
                "readiness": readiness,
            })
        })
        .collect();
    Ok(Json(serde_json::json!(classified)))
}
