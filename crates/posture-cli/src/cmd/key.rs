use crate::output::print_json;
use posture_core::storage;

pub fn run(input: &str, json: bool) -> anyhow::Result<()> {
    let key = storage::extract_object_key(input)?;
    if json {
        return print_json(&serde_json::json!({ "key": key }));
    }
    println!("{key}");
    Ok(())
}
