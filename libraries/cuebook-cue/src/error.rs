//! Error types for cue-sheet and wave-header parsing

use thiserror::Error;

/// Result type alias using `CueError`
pub type Result<T> = std::result::Result<T, CueError>;

/// Track-listing parse errors
#[derive(Error, Debug)]
pub enum CueError {
    /// Quoted-string command with missing or unterminated quoting
    #[error("malformed track listing at line {line}")]
    Malformed { line: usize },

    /// I/O error reading the listing file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Wave container-header errors
#[derive(Error, Debug)]
pub enum WaveError {
    /// Not an uncompressed PCM wave file, or a required sub-chunk is absent
    #[error("unsupported wave format: {0}")]
    UnsupportedFormat(String),

    /// A declared length is inconsistent with the file's actual size
    #[error("malformed wave header: {0}")]
    Malformed(String),

    /// I/O error reading the wave file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CueError> for cuebook_core::CuebookError {
    fn from(err: CueError) -> Self {
        match err {
            CueError::Malformed { .. } => Self::Malformed(err.to_string()),
            CueError::Io(e) => Self::Io(e),
        }
    }
}

impl From<WaveError> for cuebook_core::CuebookError {
    fn from(err: WaveError) -> Self {
        match err {
            WaveError::UnsupportedFormat(msg) => Self::Unsupported(msg),
            WaveError::Malformed(msg) => Self::Malformed(msg),
            WaveError::Io(e) => Self::Io(e),
        }
    }
}
