use axum::extract::State;
use axum::Json;
use posture_core::snapshot::Snapshot;
use posture_core::summary::{self, FrameworkSummary};

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/summaries — derive summaries for every framework in the posted
/// snapshot. The request body is the whole derivation input; nothing is
/// retained afterwards.
pub async fn post_summaries(
    Json(snapshot): Json<Snapshot>,
) -> Result<Json<Vec<FrameworkSummary>>, AppError> {
    Ok(Json(summary::summarize_snapshot(&snapshot)))
}

/// GET /api/summaries — derive summaries from the configured snapshot file.
/// The file is re-read on every request; there is no caching across calls.
pub async fn get_summaries(
    State(app): State<AppState>,
) -> Result<Json<Vec<FrameworkSummary>>, AppError> {
    let path = app
        .snapshot_path
        .clone()
        .ok_or_else(|| AppError(anyhow::anyhow!("no snapshot file configured")))?;

    let summaries = tokio::task::spawn_blocking(move || {
        let snapshot = posture_core::io::read_snapshot(&path)?;
        Ok::<_, posture_core::PostureError>(summary::summarize_snapshot(&snapshot))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(summaries))
}
