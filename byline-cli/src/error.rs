//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid chunk size option
    InvalidChunkSize(usize),
    /// Input could not be consumed
    InputError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidChunkSize(size) => {
                write!(f, "Invalid chunk size: {size} (must be at least 1)")
            }
            CliError::InputError(msg) => write!(f, "Input error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
