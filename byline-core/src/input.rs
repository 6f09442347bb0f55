//! Input abstraction for line reading
//!
//! An [`Input`] names a byte source without opening it. The reader opens
//! the underlying resource on the first pull, so constructing an `Input`
//! (or a reader around one) never fails.

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::source::{ChunkSource, FileSource, MemorySource, ReaderSource};
use std::io::Read;
use std::path::PathBuf;

/// Unified input abstraction
///
/// Supports various input sources while providing a consistent interface
/// for line reading.
pub enum Input {
    /// Direct text string
    Text(String),
    /// File path to open lazily
    File(PathBuf),
    /// Bytes to process as UTF-8 text
    Bytes(Vec<u8>),
    /// Reader stream (for stdin, network, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Open the named resource and return a chunk source over it
    ///
    /// File inputs map open failures to [`ReadError::NotFound`] or
    /// [`ReadError::PermissionDenied`] before the first chunk is read.
    ///
    /// [`ReadError::NotFound`]: crate::error::ReadError::NotFound
    /// [`ReadError::PermissionDenied`]: crate::error::ReadError::PermissionDenied
    pub(crate) fn open(self, config: &ReaderConfig) -> Result<Box<dyn ChunkSource + Send>> {
        match self {
            Input::Text(text) => Ok(Box::new(MemorySource::new(text.into_bytes(), config))),
            Input::File(path) => Ok(Box::new(FileSource::open(&path, config)?)),
            Input::Bytes(bytes) => Ok(Box::new(MemorySource::new(bytes, config))),
            Input::Reader(reader) => Ok(Box::new(ReaderSource::new(reader, config))),
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
