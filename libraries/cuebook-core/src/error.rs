/// Core error types for Cuebook
use thiserror::Error;

/// Result type alias using `CuebookError`
pub type Result<T> = std::result::Result<T, CuebookError>;

/// Core error type for Cuebook
///
/// The taxonomy mirrors how failures propagate through the engine: bulk
/// scans skip-and-report, single-item lookups surface one of these directly.
#[derive(Error, Debug)]
pub enum CuebookError {
    /// Entity not found (path absent from catalog or filesystem)
    #[error("{entity} not found: {path}")]
    NotFound { entity: String, path: String },

    /// Track-listing syntax error or header length inconsistency
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// Non-PCM audio header, unsupported tag container
    #[error("Unsupported format: {0}")]
    Unsupported(String),

    /// Scan aborted because the request deadline expired
    #[error("Scan timed out")]
    Timeout,

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CuebookError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, path: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            path: path.into(),
        }
    }

    /// Create a malformed input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create an unsupported format error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}
