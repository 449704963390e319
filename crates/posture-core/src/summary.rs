use crate::classifier;
use crate::progress;
use crate::score::{BadgeSeverity, ComplianceScore};
use crate::snapshot::{FrameworkInstance, Snapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FrameworkSummary
// ---------------------------------------------------------------------------

/// Everything the presentation layer needs to render one framework card:
/// badge, counts, and the derivation timestamp. Pure output, recomputed from
/// a fresh snapshot on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkSummary {
    pub framework_id: String,
    pub name: String,
    pub description: String,
    pub score: ComplianceScore,
    pub status_label: String,
    pub status_severity: BadgeSeverity,
    pub published_policies: usize,
    pub total_policies: usize,
    pub done_tasks: usize,
    pub total_tasks: usize,
    pub total_controls: usize,
    pub not_started_controls: usize,
    pub generated_at: DateTime<Utc>,
}

/// Derive the summary for one framework instance against the snapshot's task
/// collection and the given upstream score.
pub fn summarize_framework(
    snapshot: &Snapshot,
    framework: &FrameworkInstance,
    score: ComplianceScore,
) -> FrameworkSummary {
    let progress = progress::aggregate(snapshot, framework);
    let badge = score.badge();

    FrameworkSummary {
        framework_id: framework.id.clone(),
        name: framework.framework.name.clone(),
        description: framework.framework.description.clone(),
        score,
        status_label: badge.label.to_string(),
        status_severity: badge.severity,
        published_policies: progress.policies_published.count,
        total_policies: progress.policies_published.total,
        done_tasks: progress.tasks_done.count,
        total_tasks: progress.tasks_done.total,
        total_controls: progress.total_controls,
        not_started_controls: classifier::not_started_count(snapshot, framework),
        generated_at: Utc::now(),
    }
}

/// Summaries for every framework instance in the snapshot, using the
/// snapshot's score map (missing entries score 0).
pub fn summarize_snapshot(snapshot: &Snapshot) -> Vec<FrameworkSummary> {
    snapshot
        .frameworks
        .iter()
        .map(|fw| summarize_framework(snapshot, fw, snapshot.score_for(&fw.id)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
