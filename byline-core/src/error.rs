//! Error types for the line reading pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while opening or draining a line reader
#[derive(Error, Debug)]
pub enum ReadError {
    /// The input path did not resolve to an openable file
    #[error("file not found: {path}")]
    NotFound {
        /// The path that failed to resolve
        path: PathBuf,
    },

    /// The input path exists but is not readable
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be opened
        path: PathBuf,
    },

    /// I/O failure while pulling a chunk from the source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or truncated UTF-8 in the input
    #[error("encoding error: {reason}")]
    Encoding {
        /// What was wrong with the byte sequence
        reason: String,
    },
}

impl ReadError {
    /// Whether this error means the input could not be found
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReadError::NotFound { .. })
    }

    /// Whether this error was raised by the UTF-8 decoder
    pub fn is_encoding(&self) -> bool {
        matches!(self, ReadError::Encoding { .. })
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ReadError>;
