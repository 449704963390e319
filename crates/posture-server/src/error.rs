use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use posture_core::PostureError;

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 404 Not Found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(PostureError::FrameworkNotFound(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<PostureError>() {
            match e {
                PostureError::FrameworkNotFound(_) => StatusCode::NOT_FOUND,
                PostureError::InvalidPolicyStatus(_)
                | PostureError::InvalidTaskStatus(_)
                | PostureError::InvalidScore(_)
                | PostureError::UnsupportedSnapshotFormat(_)
                | PostureError::NotAnObjectStoreHost(_)
                | PostureError::KeyPathTraversal
                | PostureError::EmptyObjectKey
                | PostureError::MalformedKeyInput => StatusCode::BAD_REQUEST,
                PostureError::Io(_) | PostureError::Yaml(_) | PostureError::Json(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
