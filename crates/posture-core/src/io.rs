use crate::error::{PostureError, Result};
use crate::snapshot::Snapshot;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Load a snapshot from a JSON or YAML file, dispatching on extension.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let data = std::fs::read_to_string(path)?;
    match ext.as_str() {
        "json" => Ok(serde_json::from_str(&data)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&data)?),
        other => Err(PostureError::UnsupportedSnapshotFormat(other.to_string())),
    }
}

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from corrupting report files.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL_JSON: &str = r#"{ "organization_id": "org_1" }"#;
    const MINIMAL_YAML: &str = "organization_id: org_1\n";

    #[test]
    fn reads_json_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, MINIMAL_JSON).unwrap();
        let snap = read_snapshot(&path).unwrap();
        assert_eq!(snap.organization_id, "org_1");
    }

    #[test]
    fn reads_yaml_snapshot() {
        let dir = TempDir::new().unwrap();
        for name in ["snapshot.yaml", "snapshot.yml"] {
            let path = dir.path().join(name);
            std::fs::write(&path, MINIMAL_YAML).unwrap();
            assert_eq!(read_snapshot(&path).unwrap().organization_id, "org_1");
        }
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.toml");
        std::fs::write(&path, MINIMAL_JSON).unwrap();
        assert!(matches!(
            read_snapshot(&path).unwrap_err(),
            PostureError::UnsupportedSnapshotFormat(_)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_snapshot(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, PostureError::Io(_)));
    }

    #[test]
    fn atomic_write_creates_file_and_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports/out.json");
        atomic_write(&path, b"[]").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
