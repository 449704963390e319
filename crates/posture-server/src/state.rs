use std::path::PathBuf;

/// Shared application state passed to all route handlers.
///
/// There is no mutable state: every request derives from its own snapshot,
/// so requests are arbitrarily parallelizable.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot file backing the GET endpoints; POST bodies carry their own.
    pub snapshot_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(snapshot_path: Option<PathBuf>) -> Self {
        Self { snapshot_path }
    }
}
