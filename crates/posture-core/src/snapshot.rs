use crate::error::{PostureError, Result};
use crate::score::ComplianceScore;
use crate::types::{PolicyStatus, TaskStatus};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

// ---------------------------------------------------------------------------
// Entity shapes
// ---------------------------------------------------------------------------

/// Policy as embedded under a control: just enough to count and classify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySummary {
    pub id: String,
    pub name: String,
    pub status: PolicyStatus,
}

/// A compliance requirement. Policy associations are framework-independent;
/// the same control may appear under multiple frameworks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    #[serde(default)]
    pub policies: Vec<PolicySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkMeta {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One compliance framework adopted by an organization, with the controls
/// mapped into it. Belongs to exactly one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkInstance {
    pub id: String,
    pub framework: FrameworkMeta,
    #[serde(default)]
    pub controls: Vec<Control>,
}

impl FrameworkInstance {
    /// Identifiers of the controls mapped into this framework.
    pub fn control_ids(&self) -> HashSet<&str> {
        self.controls.iter().map(|c| c.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlRef {
    pub id: String,
}

/// A remediation activity, linked to zero or more controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub controls: Vec<ControlRef>,
}

impl Task {
    pub fn touches_control(&self, control_id: &str) -> bool {
        self.controls.iter().any(|c| c.id == control_id)
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One organization's materialized compliance data. The derivation reads it,
/// never mutates it; nothing is retained across invocations.
///
/// The organization identifier is an explicit field rather than ambient
/// request state, so every derivation is scoped by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub organization_id: String,
    #[serde(default)]
    pub frameworks: Vec<FrameworkInstance>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Upstream compliance score per framework instance id, 0-100.
    /// Missing entries default to 0 at the point of use.
    #[serde(default)]
    pub scores: BTreeMap<String, ComplianceScore>,
}

impl Snapshot {
    /// Score for a framework instance, defaulting to 0 when absent.
    pub fn score_for(&self, framework_id: &str) -> ComplianceScore {
        self.scores.get(framework_id).copied().unwrap_or_default()
    }

    pub fn framework(&self, id: &str) -> Result<&FrameworkInstance> {
        self.frameworks
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| PostureError::FrameworkNotFound(id.to_string()))
    }

    /// Tasks whose associated-control set intersects the given framework's
    /// control ids.
    pub fn tasks_for_framework<'a>(&'a self, framework: &FrameworkInstance) -> Vec<&'a Task> {
        let ids = framework.control_ids();
        self.tasks
            .iter()
            .filter(|t| t.controls.iter().any(|c| ids.contains(c.id.as_str())))
            .collect()
    }

    /// Tasks associated with a single control.
    pub fn tasks_for_control<'a>(&'a self, control_id: &str) -> Vec<&'a Task> {
        self.tasks
            .iter()
            .filter(|t| t.touches_control(control_id))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
