use crate::output::print_json;
use posture_core::score::ComplianceScore;

pub fn run(value: u32, json: bool) -> anyhow::Result<()> {
    let score = ComplianceScore::new(value)?;
    let badge = score.badge();

    if json {
        return print_json(&serde_json::json!({
            "score": score,
            "label": badge.label,
            "severity": badge.severity,
            "color": score.color(),
        }));
    }

    println!("score:  {score}");
    println!("badge:  {} ({})", badge.label, badge.severity);
    println!("color:  {}", score.color());
    Ok(())
}
