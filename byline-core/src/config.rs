//! Configuration types for the reader

/// Default chunk size for source reads (64 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Reader configuration
///
/// Controls how the underlying byte source is pulled. Line splitting is
/// insensitive to chunk size; this only tunes I/O granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Size of each chunk requested from the source, in bytes
    pub chunk_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ReaderConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk size in bytes (clamped to at least 1)
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = bytes.max(1);
        self
    }

    /// Create a configuration tuned for large sequential scans
    pub fn large_chunks() -> Self {
        Self {
            chunk_size: 1024 * 1024, // 1 MiB
        }
    }
}
