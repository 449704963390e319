use posture_core::config::Config;
use std::path::{Path, PathBuf};

pub fn run(
    config_path: Option<&Path>,
    port: Option<u16>,
    snapshot: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(snapshot) = snapshot {
        config.snapshot_path = Some(snapshot);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(posture_server::serve(config))
}
