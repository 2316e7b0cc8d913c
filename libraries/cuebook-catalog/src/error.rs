//! Error types for catalog construction and the request facade

use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Path absent from the filesystem or the most recent scan
    #[error("not found: {0}")]
    NotFound(String),

    /// Scan root exists but is not a directory
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Request deadline expired; in-flight work was abandoned
    #[error("scan timed out")]
    Timeout,

    /// Track-listing parse error
    #[error(transparent)]
    Cue(#[from] cuebook_cue::CueError),

    /// Wave header error
    #[error(transparent)]
    Wave(#[from] cuebook_cue::WaveError),

    /// Tag extraction error
    #[error(transparent)]
    Tag(#[from] cuebook_metadata::TagError),

    /// A scan worker panicked or was cancelled
    #[error("scan worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Settings could not be loaded
    #[error("settings error: {0}")]
    Settings(#[from] ::config::ConfigError),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CatalogError> for cuebook_core::CuebookError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(path) => Self::not_found("Path", path),
            CatalogError::InvalidPath(msg) => Self::Other(msg),
            CatalogError::Timeout => Self::Timeout,
            CatalogError::Cue(e) => e.into(),
            CatalogError::Wave(e) => e.into(),
            CatalogError::Tag(e) => e.into(),
            CatalogError::Io(e) => Self::Io(e),
            other => Self::Other(other.to_string()),
        }
    }
}
