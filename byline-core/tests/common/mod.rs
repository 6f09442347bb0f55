//! Shared test support: scripted chunk sources with close instrumentation

#![allow(dead_code)]

use byline_core::{ChunkSource, ReadError};
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// One scripted step of a source's lifetime
pub enum Step {
    /// Deliver this chunk
    Chunk(Vec<u8>),
    /// Fail the read with an I/O error
    Fail,
}

/// A chunk source that replays a fixed script and counts close calls
pub struct ScriptedSource {
    steps: VecDeque<Step>,
    closes: Arc<AtomicUsize>,
}

impl ScriptedSource {
    /// Source delivering the given chunks, then end-of-input
    pub fn new(chunks: &[&[u8]]) -> (Self, Arc<AtomicUsize>) {
        let steps = chunks.iter().map(|c| Step::Chunk(c.to_vec())).collect();
        Self::from_steps(steps)
    }

    /// Source delivering the given chunks, then a read failure
    pub fn failing_after(chunks: &[&[u8]]) -> (Self, Arc<AtomicUsize>) {
        let mut steps: VecDeque<Step> =
            chunks.iter().map(|c| Step::Chunk(c.to_vec())).collect();
        steps.push_back(Step::Fail);
        Self::from_steps(steps)
    }

    fn from_steps(steps: VecDeque<Step>) -> (Self, Arc<AtomicUsize>) {
        let closes = Arc::new(AtomicUsize::new(0));
        (
            Self {
                steps,
                closes: Arc::clone(&closes),
            },
            closes,
        )
    }
}

impl ChunkSource for ScriptedSource {
    fn next_chunk(&mut self) -> byline_core::Result<Option<Vec<u8>>> {
        match self.steps.pop_front() {
            Some(Step::Chunk(chunk)) => Ok(Some(chunk)),
            Some(Step::Fail) => Err(ReadError::Io(io::Error::other("injected read failure"))),
            None => Ok(None),
        }
    }

    fn close(&mut self) -> byline_core::Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Number of close calls recorded so far
pub fn close_count(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
