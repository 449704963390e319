use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostureError {
    #[error("framework instance not found: {0}")]
    FrameworkNotFound(String),

    #[error("invalid policy status: {0}")]
    InvalidPolicyStatus(String),

    #[error("invalid task status: {0}")]
    InvalidTaskStatus(String),

    #[error("invalid compliance score {0}: must be 0-100")]
    InvalidScore(u32),

    #[error("unsupported snapshot format '{0}': expected .json, .yaml, or .yml")]
    UnsupportedSnapshotFormat(String),

    #[error("invalid storage reference: not an S3 endpoint: {0}")]
    NotAnObjectStoreHost(String),

    #[error("invalid object key: path traversal detected")]
    KeyPathTraversal,

    #[error("invalid object key: key cannot be empty")]
    EmptyObjectKey,

    #[error("invalid object key: malformed URL in key position")]
    MalformedKeyInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostureError>;
