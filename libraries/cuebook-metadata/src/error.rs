/// Tag-extraction errors
use thiserror::Error;

/// Result type alias using `TagError`
pub type Result<T> = std::result::Result<T, TagError>;

/// Tag extraction error types
#[derive(Error, Debug)]
pub enum TagError {
    /// File not found
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Unreadable or unsupported tag container
    #[error(transparent)]
    Unsupported(#[from] lofty::error::LoftyError),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<TagError> for cuebook_core::CuebookError {
    fn from(err: TagError) -> Self {
        match err {
            TagError::FileNotFound(path) => Self::not_found("Song", path),
            TagError::Unsupported(e) => Self::Unsupported(e.to_string()),
            TagError::Io(e) => Self::Io(e),
        }
    }
}
