//! Byte chunk sources
//!
//! A [`ChunkSource`] delivers an input as an ordered sequence of byte
//! chunks. Chunk boundaries carry no meaning: consumers must behave
//! identically whether chunks arrive one byte or one mebibyte at a time.

use crate::config::ReaderConfig;
use crate::error::{ReadError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// An ordered sequence of byte chunks with a releasable resource behind it
pub trait ChunkSource {
    /// Pull the next chunk, or `None` once the input is exhausted
    ///
    /// Chunks must be non-empty; end of input is signalled with `None`,
    /// never with an empty chunk.
    fn next_chunk(&mut self) -> Result<Option<Vec<u8>>>;

    /// Release the underlying resource
    ///
    /// Idempotent: calling it again, or after a failed read, is safe.
    fn close(&mut self) -> Result<()>;
}

/// Chunk source over any [`Read`] implementation
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: Option<R>,
    chunk_size: usize,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap an already-open reader
    pub fn new(reader: R, config: &ReaderConfig) -> Self {
        Self {
            reader: Some(reader),
            chunk_size: config.chunk_size.max(1),
        }
    }
}

impl<R: Read> ChunkSource for ReaderSource<R> {
    fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };
        let mut buf = vec![0u8; self.chunk_size];
        let n = reader.read(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        buf.truncate(n);
        Ok(Some(buf))
    }

    fn close(&mut self) -> Result<()> {
        self.reader.take();
        Ok(())
    }
}

/// File-backed chunk source
#[derive(Debug)]
pub struct FileSource {
    inner: ReaderSource<File>,
}

impl FileSource {
    /// Open a file for chunked reading
    ///
    /// Open failures are mapped to the reader error taxonomy:
    /// missing paths become [`ReadError::NotFound`], unreadable paths
    /// become [`ReadError::PermissionDenied`].
    pub fn open(path: &Path, config: &ReaderConfig) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReadError::NotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::PermissionDenied => ReadError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => ReadError::Io(e),
        })?;
        Ok(Self {
            inner: ReaderSource::new(file, config),
        })
    }
}

impl ChunkSource for FileSource {
    fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        self.inner.next_chunk()
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }
}

/// In-memory chunk source for text and byte inputs
pub struct MemorySource {
    data: Vec<u8>,
    pos: usize,
    chunk_size: usize,
}

impl MemorySource {
    /// Wrap a byte buffer, yielding it in configured chunk sizes
    pub fn new(data: Vec<u8>, config: &ReaderConfig) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: config.chunk_size.max(1),
        }
    }
}

impl ChunkSource for MemorySource {
    fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        if self.pos >= self.data.len() {
            return Ok(None);
        }
        let end = (self.pos + self.chunk_size).min(self.data.len());
        let chunk = self.data[self.pos..end].to_vec();
        self.pos = end;
        Ok(Some(chunk))
    }

    fn close(&mut self) -> Result<()> {
        self.pos = self.data.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_memory_source_chunking() {
        let config = ReaderConfig::new().chunk_size(4);
        let mut source = MemorySource::new(b"abcdefghij".to_vec(), &config);

        assert_eq!(source.next_chunk().unwrap(), Some(b"abcd".to_vec()));
        assert_eq!(source.next_chunk().unwrap(), Some(b"efgh".to_vec()));
        assert_eq!(source.next_chunk().unwrap(), Some(b"ij".to_vec()));
        assert_eq!(source.next_chunk().unwrap(), None);
    }

    #[test]
    fn test_memory_source_close_ends_iteration() {
        let config = ReaderConfig::default();
        let mut source = MemorySource::new(b"abc".to_vec(), &config);

        source.close().unwrap();
        assert_eq!(source.next_chunk().unwrap(), None);
    }

    #[test]
    fn test_file_source_reads_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chunked.txt");
        fs::write(&path, "0123456789").unwrap();

        let config = ReaderConfig::new().chunk_size(3);
        let mut source = FileSource::open(&path, &config).unwrap();

        let mut collected = Vec::new();
        while let Some(chunk) = source.next_chunk().unwrap() {
            assert!(chunk.len() <= 3);
            collected.extend_from_slice(&chunk);
        }
        assert_eq!(collected, b"0123456789");
    }

    #[test]
    fn test_file_source_not_found() {
        let config = ReaderConfig::default();
        let err = FileSource::open(Path::new("/nonexistent/file.txt"), &config).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_file_source_close_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("twice.txt");
        fs::write(&path, "data").unwrap();

        let config = ReaderConfig::default();
        let mut source = FileSource::open(&path, &config).unwrap();
        source.close().unwrap();
        source.close().unwrap();
        assert_eq!(source.next_chunk().unwrap(), None);
    }

    #[test]
    fn test_reader_source_after_close_yields_none() {
        let config = ReaderConfig::default();
        let mut source = ReaderSource::new(std::io::Cursor::new(b"abc".to_vec()), &config);
        source.close().unwrap();
        assert_eq!(source.next_chunk().unwrap(), None);
    }
}
