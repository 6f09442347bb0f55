//! Incremental UTF-8 decoding
//!
//! Chunk boundaries may fall in the middle of a multi-byte character, so
//! decoding keeps a small residual of undecoded bytes between chunks.

use crate::error::{ReadError, Result};

/// Maximum bytes a UTF-8 encoded character occupies
const MAX_CHAR_BYTES: usize = 4;

/// Streaming UTF-8 decoder
///
/// Holds back up to three bytes of a trailing incomplete character between
/// [`decode`] calls and prepends them to the next chunk. Invalid byte
/// sequences fail; text decoded before the offending bytes is still
/// delivered, with the error raised on the following call. A truncated
/// sequence left over at end of input fails in [`finish`]. No substitution
/// characters are emitted.
///
/// [`decode`]: Utf8Decoder::decode
/// [`finish`]: Utf8Decoder::finish
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    /// Trailing bytes of an incomplete character, carried to the next chunk
    residual: Vec<u8>,
    /// An invalid sequence was found after some decodable text; the error
    /// is raised on the next call so that text is not lost
    deferred_error: Option<String>,
}

impl Utf8Decoder {
    /// Create a decoder with no residual state
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one chunk, prepending any residual from the previous chunk
    ///
    /// Returns the decoded text; a trailing incomplete character is held
    /// back rather than decoded, so the output may be shorter than the
    /// input even on success.
    pub fn decode(&mut self, chunk: &[u8]) -> Result<String> {
        if let Some(reason) = self.deferred_error.take() {
            return Err(ReadError::Encoding { reason });
        }

        let mut bytes = std::mem::take(&mut self.residual);
        bytes.extend_from_slice(chunk);

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                let valid_up_to = err.utf8_error().valid_up_to();
                let invalid = err.utf8_error().error_len().is_some();
                let reason = format!("invalid UTF-8 sequence at byte offset {valid_up_to}");

                if invalid && valid_up_to == 0 {
                    return Err(ReadError::Encoding { reason });
                }

                let mut bytes = err.into_bytes();
                let tail = bytes.split_off(valid_up_to);
                if invalid {
                    self.deferred_error = Some(reason.clone());
                } else {
                    // Unexpected end of data: the tail may be completed by
                    // the next chunk.
                    debug_assert!(tail.len() < MAX_CHAR_BYTES);
                    self.residual = tail;
                }
                String::from_utf8(bytes).map_err(|_| ReadError::Encoding { reason })
            }
        }
    }

    /// Signal end of input
    ///
    /// A non-empty residual at this point can never form a character and
    /// is reported as an encoding error exactly once.
    pub fn finish(&mut self) -> Result<()> {
        if let Some(reason) = self.deferred_error.take() {
            return Err(ReadError::Encoding { reason });
        }
        if self.residual.is_empty() {
            return Ok(());
        }
        let len = self.residual.len();
        self.residual.clear();
        Err(ReadError::Encoding {
            reason: format!("input ends with {len} byte(s) of an incomplete UTF-8 sequence"),
        })
    }
}
