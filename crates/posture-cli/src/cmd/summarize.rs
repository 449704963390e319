use crate::output::{print_json, print_table};
use anyhow::Context;
use posture_core::summary::{self, FrameworkSummary};
use posture_core::{io, progress::Ratio};
use std::path::Path;

pub fn run(
    snapshot_path: &Path,
    framework: Option<&str>,
    out: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let snapshot = io::read_snapshot(snapshot_path).context("failed to read snapshot")?;

    let summaries: Vec<FrameworkSummary> = match framework {
        Some(id) => {
            let fw = snapshot.framework(id)?;
            vec![summary::summarize_framework(
                &snapshot,
                fw,
                snapshot.score_for(id),
            )]
        }
        None => summary::summarize_snapshot(&snapshot),
    };

    if let Some(out_path) = out {
        let data = serde_json::to_string_pretty(&summaries)?;
        io::atomic_write(out_path, data.as_bytes())?;
        println!(
            "wrote {} summaries to {}",
            summaries.len(),
            out_path.display()
        );
        return Ok(());
    }

    if json {
        return print_json(&summaries);
    }

    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.score.to_string(),
                s.status_label.clone(),
                format!(
                    "{} published",
                    Ratio::new(s.published_policies, s.total_policies)
                ),
                format!("{} done", Ratio::new(s.done_tasks, s.total_tasks)),
                s.total_controls.to_string(),
                s.not_started_controls.to_string(),
            ]
        })
        .collect();
    print_table(
        &[
            "FRAMEWORK",
            "SCORE",
            "STATUS",
            "POLICIES",
            "TASKS",
            "CONTROLS",
            "NOT STARTED",
        ],
        &rows,
    );
    Ok(())
}
