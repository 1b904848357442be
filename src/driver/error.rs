//! Session error types.

use thiserror::Error;

/// Errors that end an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render outcome as JSON: {0}")]
    Render(#[from] serde_json::Error),
}
