use crate::snapshot::{Control, PolicySummary};
use crate::types::PolicyStatus;
use std::collections::HashSet;

/// Collapse the policies referenced by any control in a framework into the
/// distinct set, keyed by policy id.
///
/// First occurrence wins: if two controls embed the same policy id with
/// different statuses, the status seen first is kept. Identifier equality is
/// the only dedup key. Order follows first occurrence so output is stable.
pub fn unique_policies(controls: &[Control]) -> Vec<&PolicySummary> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::new();
    for control in controls {
        for policy in &control.policies {
            if seen.insert(policy.id.as_str()) {
                unique.push(policy);
            }
        }
    }
    unique
}

/// Count of deduplicated policies in `published` status.
pub fn published_count(policies: &[&PolicySummary]) -> usize {
    policies
        .iter()
        .filter(|p| p.status == PolicyStatus::Published)
        .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(id: &str, status: PolicyStatus) -> PolicySummary {
        PolicySummary {
            id: id.to_string(),
            name: format!("Policy {id}"),
            status,
        }
    }

    fn control(id: &str, policies: Vec<PolicySummary>) -> Control {
        Control {
            id: id.to_string(),
            policies,
        }
    }

    #[test]
    fn shared_policy_counted_once() {
        let controls = vec![
            control("ctl_1", vec![policy("pol_a", PolicyStatus::Published)]),
            control("ctl_2", vec![policy("pol_a", PolicyStatus::Published)]),
            control("ctl_3", vec![policy("pol_b", PolicyStatus::Draft)]),
        ];
        let unique = unique_policies(&controls);
        assert_eq!(unique.len(), 2);
        assert_eq!(
            unique.iter().filter(|p| p.id == "pol_a").count(),
            1,
            "shared policy id must appear exactly once"
        );
    }

    #[test]
    fn first_occurrence_wins_on_status_conflict() {
        let controls = vec![
            control("ctl_1", vec![policy("pol_a", PolicyStatus::Draft)]),
            control("ctl_2", vec![policy("pol_a", PolicyStatus::Published)]),
        ];
        let unique = unique_policies(&controls);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].status, PolicyStatus::Draft);
    }

    #[test]
    fn empty_inputs_yield_empty_set() {
        assert!(unique_policies(&[]).is_empty());
        let controls = vec![control("ctl_1", vec![])];
        assert!(unique_policies(&controls).is_empty());
    }

    #[test]
    fn published_count_ignores_draft_and_needs_review() {
        let controls = vec![control(
            "ctl_1",
            vec![
                policy("pol_a", PolicyStatus::Published),
                policy("pol_b", PolicyStatus::Draft),
                policy("pol_c", PolicyStatus::NeedsReview),
            ],
        )];
        let unique = unique_policies(&controls);
        assert_eq!(published_count(&unique), 1);
    }

    #[test]
    fn preserves_first_occurrence_order() {
        let controls = vec![
            control("ctl_1", vec![policy("pol_b", PolicyStatus::Draft)]),
            control("ctl_2", vec![policy("pol_a", PolicyStatus::Draft)]),
            control("ctl_3", vec![policy("pol_b", PolicyStatus::Draft)]),
        ];
        let ids: Vec<&str> = unique_policies(&controls)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["pol_b", "pol_a"]);
    }
}
