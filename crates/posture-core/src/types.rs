use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PolicyStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a policy document. Wire values match the external
/// store exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Draft,
    Published,
    NeedsReview,
}

impl PolicyStatus {
    pub fn all() -> &'static [PolicyStatus] {
        &[
            PolicyStatus::Draft,
            PolicyStatus::Published,
            PolicyStatus::NeedsReview,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyStatus::Draft => "draft",
            PolicyStatus::Published => "published",
            PolicyStatus::NeedsReview => "needs_review",
        }
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PolicyStatus {
    type Err = crate::error::PostureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PolicyStatus::Draft),
            "published" => Ok(PolicyStatus::Published),
            "needs_review" => Ok(PolicyStatus::NeedsReview),
            _ => Err(crate::error::PostureError::InvalidPolicyStatus(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a remediation task. Only `todo` and `done` carry meaning for the
/// derivation; everything else counts as "work has begun, not finished".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    NotRelevant,
}

impl TaskStatus {
    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Done,
            TaskStatus::NotRelevant,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
            TaskStatus::NotRelevant => "not_relevant",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = crate::error::PostureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            "not_relevant" => Ok(TaskStatus::NotRelevant),
            _ => Err(crate::error::PostureError::InvalidTaskStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ControlReadiness
// ---------------------------------------------------------------------------

/// Conservative "has any work begun" signal for a control. Exactly one of the
/// two variants applies to every control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlReadiness {
    NotStarted,
    InProgress,
}

impl fmt::Display for ControlReadiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ControlReadiness::NotStarted => "not_started",
            ControlReadiness::InProgress => "in_progress",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
