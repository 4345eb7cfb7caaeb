//! Process-level errors of the `post-editor` binary.

use post_core::Failure;
use thiserror::Error;

/// Errors that end the `post-editor` process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("telemetry: {0}")]
    Telemetry(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("no post with id {0}")]
    UnknownPost(post_core::PostId),

    /// A remote operation failed; the message is what the editor displays.
    #[error("{0}")]
    Remote(Failure),
}

impl From<Failure> for AppError {
    fn from(failure: Failure) -> Self {
        AppError::Remote(failure)
    }
}
