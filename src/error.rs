use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors raised by the fallible edges of the crate (id parsing, config I/O).
///
/// Board mutations never fail: an unknown id is a no-op.
#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Invalid list ID format: {0}")]
    InvalidListId(String),

    #[error("Invalid task ID format: {0}")]
    InvalidTaskId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
