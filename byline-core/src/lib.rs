//! Lazy, line-numbered reading over files and other byte streams
//!
//! This crate turns an arbitrary byte source into a stream of logical
//! lines, each paired with its 1-based line number, without loading the
//! whole input into memory. Input is pulled chunk by chunk; multi-byte
//! characters and CR/LF/CRLF terminators that straddle chunk boundaries
//! are reassembled correctly, and the underlying resource is released
//! exactly once however iteration ends.
//!
//! # Example
//!
//! ```no_run
//! use byline_core::by_line;
//!
//! for record in by_line("input.txt") {
//!     let record = record?;
//!     println!("Line {}: {}", record.number, record.line);
//! }
//! # Ok::<(), byline_core::ReadError>(())
//! ```
//!
//! The file is opened on the first pull, so a missing path surfaces as a
//! [`ReadError::NotFound`] from the iterator rather than from `by_line`
//! itself. Calling `by_line` again produces an independent reader that
//! re-opens the file from the start.

#![warn(missing_docs)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod input;
pub mod reader;
pub mod source;
pub mod splitter;

// Re-export key types
pub use config::{ReaderConfig, DEFAULT_CHUNK_SIZE};
pub use error::{ReadError, Result};
pub use input::Input;
pub use reader::{LineRecord, LineReader, ReaderState};
pub use source::ChunkSource;

use std::path::PathBuf;

/// Read a file line by line with 1-based line numbers
///
/// Returns a lazy iterator of [`LineRecord`]s. Each call creates an
/// independent reader that opens the file on its first pull.
pub fn by_line<P: Into<PathBuf>>(path: P) -> LineReader {
    LineReader::new(Input::from_file(path.into()))
}
