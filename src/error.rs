use thiserror::Error;

/// Errors raised at the I/O edges of the editor (project files, config).
///
/// Timeline edits never produce one of these: invalid edits are no-ops.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;
