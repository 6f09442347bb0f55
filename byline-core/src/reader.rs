//! The numbered line reader and its lifecycle
//!
//! [`LineReader`] drives the source → decoder → splitter pipeline one
//! pull at a time and owns the underlying resource. The resource is
//! released exactly once on every exit path: normal exhaustion, an
//! explicit [`close`], dropping the reader mid-iteration, or a source or
//! decoder failure.
//!
//! [`close`]: LineReader::close

use crate::config::ReaderConfig;
use crate::decoder::Utf8Decoder;
use crate::error::Result;
use crate::input::Input;
use crate::source::ChunkSource;
use crate::splitter::LineSplitter;
use std::collections::VecDeque;

/// One decoded line and its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineRecord {
    /// Line content, excluding the terminator
    pub line: String,
    /// 1-based line number, strictly increasing with no gaps
    pub number: u64,
}

/// Observable lifecycle state of a [`LineReader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// No pull yet; the source is unopened
    NotStarted,
    /// The source is open and being drained
    Open,
    /// The source ran out of input; the resource is released
    Exhausted,
    /// The consumer closed the reader before exhaustion
    Closed,
    /// A source or decoder error ended iteration; the resource is released
    Failed,
}

enum State {
    NotStarted { input: Input },
    Open { pipeline: Pipeline },
    Exhausted,
    Closed,
    Failed,
}

struct Pipeline {
    source: Box<dyn ChunkSource + Send>,
    decoder: Utf8Decoder,
    splitter: LineSplitter,
}

impl Pipeline {
    fn new(source: Box<dyn ChunkSource + Send>) -> Self {
        Self {
            source,
            decoder: Utf8Decoder::new(),
            splitter: LineSplitter::new(),
        }
    }

    /// Release the source. Close failures cannot be meaningfully
    /// recovered during teardown, so they are logged and swallowed.
    fn release(&mut self) {
        if let Err(err) = self.source.close() {
            log::warn!("ignoring error while closing input source: {err}");
        }
    }
}

/// Lazy, line-numbered reader over a byte source
///
/// Implements `Iterator<Item = Result<LineRecord, ReadError>>`. The
/// source is opened on the first pull, so constructing a reader never
/// touches the filesystem; an unopenable input surfaces as an error on
/// that first pull instead.
///
/// After any error the reader is fused: subsequent pulls yield `None`.
/// Lines already yielded before a mid-stream failure remain valid.
///
/// A single reader must not be pulled from multiple threads at once;
/// consumers that need fan-out should distribute the produced
/// [`LineRecord`]s, not the reader itself.
pub struct LineReader {
    state: State,
    config: ReaderConfig,
    queued: VecDeque<String>,
    emitted: u64,
}

impl LineReader {
    /// Create a reader over the given input with default configuration
    pub fn new<I: Into<Input>>(input: I) -> Self {
        Self::with_config(input, ReaderConfig::default())
    }

    /// Create a reader with a custom configuration
    pub fn with_config<I: Into<Input>>(input: I, config: ReaderConfig) -> Self {
        Self {
            state: State::NotStarted {
                input: input.into(),
            },
            config,
            queued: VecDeque::new(),
            emitted: 0,
        }
    }

    /// Create a reader over an already-open chunk source
    ///
    /// The reader takes ownership of the source and releases it under
    /// the same guarantees as a lazily opened one.
    pub fn from_source(source: Box<dyn ChunkSource + Send>) -> Self {
        Self {
            state: State::Open {
                pipeline: Pipeline::new(source),
            },
            config: ReaderConfig::default(),
            queued: VecDeque::new(),
            emitted: 0,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ReaderState {
        match self.state {
            State::NotStarted { .. } => ReaderState::NotStarted,
            State::Open { .. } => ReaderState::Open,
            State::Exhausted => ReaderState::Exhausted,
            State::Closed => ReaderState::Closed,
            State::Failed => ReaderState::Failed,
        }
    }

    /// Number of lines yielded so far
    pub fn lines_read(&self) -> u64 {
        self.emitted
    }

    /// Stop iteration and release the underlying resource
    ///
    /// Idempotent. Buffered but unread lines are discarded; subsequent
    /// pulls yield `None`. Dropping the reader calls this implicitly.
    pub fn close(&mut self) {
        match &mut self.state {
            State::Open { pipeline } => {
                pipeline.release();
                self.state = State::Closed;
                self.queued.clear();
            }
            State::NotStarted { .. } => {
                self.state = State::Closed;
            }
            State::Exhausted | State::Closed | State::Failed => {}
        }
    }

    fn record(&mut self, line: String) -> LineRecord {
        self.emitted += 1;
        LineRecord {
            line,
            number: self.emitted,
        }
    }

    /// Open the source, moving `NotStarted` to `Open`
    fn open_source(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, State::Failed) {
            State::NotStarted { input } => {
                let source = input.open(&self.config)?;
                self.state = State::Open {
                    pipeline: Pipeline::new(source),
                };
                Ok(())
            }
            other => {
                self.state = other;
                Ok(())
            }
        }
    }

    /// Pull one chunk through the pipeline
    ///
    /// Returns `Ok(true)` while the source may still produce data and
    /// `Ok(false)` once it is exhausted (the final fragment, if any, is
    /// queued and the resource released before this returns).
    fn pull_chunk(&mut self) -> Result<bool> {
        let State::Open { pipeline } = &mut self.state else {
            return Ok(false);
        };
        match pipeline.source.next_chunk()? {
            Some(chunk) => {
                let text = pipeline.decoder.decode(&chunk)?;
                self.queued.extend(pipeline.splitter.push(&text));
                Ok(true)
            }
            None => {
                let flush = pipeline.decoder.finish();
                let tail = pipeline.splitter.finish();
                pipeline.release();
                match flush {
                    Ok(()) => {
                        self.state = State::Exhausted;
                        self.queued.extend(tail);
                        Ok(false)
                    }
                    Err(err) => {
                        self.state = State::Failed;
                        Err(err)
                    }
                }
            }
        }
    }

    /// Mark the reader failed, releasing the resource if still held
    fn fail(&mut self) {
        if let State::Open { pipeline } = &mut self.state {
            pipeline.release();
        }
        self.state = State::Failed;
        self.queued.clear();
    }
}

impl Iterator for LineReader {
    type Item = Result<LineRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.queued.pop_front() {
                let record = self.record(line);
                return Some(Ok(record));
            }
            match self.state {
                State::NotStarted { .. } => {
                    if let Err(err) = self.open_source() {
                        self.fail();
                        return Some(Err(err));
                    }
                }
                State::Open { .. } => match self.pull_chunk() {
                    Ok(_) => {}
                    Err(err) => {
                        self.fail();
                        return Some(Err(err));
                    }
                },
                State::Exhausted | State::Closed | State::Failed => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for LineReader {}

impl Drop for LineReader {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for LineReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineReader")
            .field("state", &self.state())
            .field("lines_read", &self.emitted)
            .field("queued", &self.queued.len())
            .finish()
    }
}
