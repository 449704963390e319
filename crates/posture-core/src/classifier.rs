use crate::snapshot::{Control, FrameworkInstance, Snapshot, Task};
use crate::types::{ControlReadiness, PolicyStatus, TaskStatus};

/// Classify a single control against the tasks associated with it.
///
/// A control is not started iff no policy has left `draft` AND no task has
/// left `todo` (empty collections count as "not left"). Anything else means
/// work has begun somewhere, so the control is in progress. This is a
/// coarse two-way signal: `needs_review` vs `published` and the finer task
/// states are deliberately not distinguished.
pub fn classify_control(control: &Control, control_tasks: &[&Task]) -> ControlReadiness {
    let policies_not_started = control.policies.is_empty()
        || control
            .policies
            .iter()
            .all(|p| p.status == PolicyStatus::Draft);

    let tasks_not_started = control_tasks.is_empty()
        || control_tasks.iter().all(|t| t.status == TaskStatus::Todo);

    if policies_not_started && tasks_not_started {
        ControlReadiness::NotStarted
    } else {
        ControlReadiness::InProgress
    }
}

/// Readiness of every control in a framework instance, in control order.
pub fn classify_framework<'a>(
    snapshot: &Snapshot,
    framework: &'a FrameworkInstance,
) -> Vec<(&'a Control, ControlReadiness)> {
    framework
        .controls
        .iter()
        .map(|control| {
            let tasks = snapshot.tasks_for_control(&control.id);
            (control, classify_control(control, &tasks))
        })
        .collect()
}

/// Number of controls in the framework where no work has begun.
pub fn not_started_count(snapshot: &Snapshot, framework: &FrameworkInstance) -> usize {
    classify_framework(snapshot, framework)
        .iter()
        .filter(|(_, readiness)| *readiness == ControlReadiness::NotStarted)
        .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
