use crate::policy;
use crate::snapshot::{FrameworkInstance, Snapshot};
use crate::types::TaskStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Ratio
// ---------------------------------------------------------------------------

/// An integer count over an integer total, never pre-divided. `0/0` is a
/// valid value and displays literally; `fraction()` defines it as 0.0 so no
/// caller ever divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub count: usize,
    pub total: usize,
}

impl Ratio {
    pub fn new(count: usize, total: usize) -> Self {
        Self { count, total }
    }

    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.count, self.total)
    }
}

// ---------------------------------------------------------------------------
// FrameworkProgress
// ---------------------------------------------------------------------------

/// Progress breakdown for one framework instance: published policies over
/// deduplicated total, done tasks over framework-scoped total, and the raw
/// control count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkProgress {
    pub policies_published: Ratio,
    pub tasks_done: Ratio,
    pub total_controls: usize,
}

/// Aggregate counts for one framework instance against the full task
/// snapshot. Controls are intrinsically framework-scoped, so their count is
/// raw; policies are deduplicated first; tasks are filtered to those touching
/// any of the framework's controls.
pub fn aggregate(snapshot: &Snapshot, framework: &FrameworkInstance) -> FrameworkProgress {
    let unique = policy::unique_policies(&framework.controls);
    let published = policy::published_count(&unique);

    let framework_tasks = snapshot.tasks_for_framework(framework);
    let done = framework_tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Done)
        .count();

    FrameworkProgress {
        policies_published: Ratio::new(published, unique.len()),
        tasks_done: Ratio::new(done, framework_tasks.len()),
        total_controls: framework.controls.len(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
