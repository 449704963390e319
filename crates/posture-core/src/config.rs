use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Server and CLI configuration, loaded from a YAML file. Every field has a
/// default so a missing or partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind: String,
    /// Port for the HTTP server (0 = OS-assigned).
    pub port: u16,
    /// Snapshot file served by the GET endpoints; POST bodies override it.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3141,
            snapshot_path: None,
        }
    }
}

impl Config {
    /// Load from a YAML file, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let data = std::fs::read_to_string(p)?;
                Ok(serde_yaml::from_str(&data)?)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.port, 3141);
        assert!(config.snapshot_path.is_none());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "port: 8080\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind, "0.0.0.0");
    }

    #[test]
    fn full_file_parses() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "bind: 127.0.0.1\nport: 9000\nsnapshot_path: /data/snapshot.json\n",
        )
        .unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
        assert_eq!(
            config.snapshot_path.as_deref(),
            Some(Path::new("/data/snapshot.json"))
        );
    }
}
