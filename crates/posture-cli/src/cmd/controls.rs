use crate::output::{print_json, print_table};
use anyhow::Context;
use posture_core::{classifier, io};
use std::path::Path;

pub fn run(snapshot_path: &Path, framework_id: &str, json: bool) -> anyhow::Result<()> {
    let snapshot = io::read_snapshot(snapshot_path).context("failed to read snapshot")?;
    let framework = snapshot.framework(framework_id)?;
    let classified = classifier::classify_framework(&snapshot, framework);

    if json {
        let list: Vec<serde_json::Value> = classified
            .iter()
            .map(|(control, readiness)| {
                serde_json::json!({
                    "control_id": control.id,
                    "readiness": readiness,
                })
            })
            .collect();
        return print_json(&list);
    }

    let rows: Vec<Vec<String>> = classified
        .iter()
        .map(|(control, readiness)| {
            vec![
                control.id.clone(),
                control.policies.len().to_string(),
                readiness.to_string(),
            ]
        })
        .collect();
    print_table(&["CONTROL", "POLICIES", "READINESS"], &rows);
    Ok(())
}
