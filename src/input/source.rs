//! Input sources: where raw key bytes come from.

use std::collections::VecDeque;
use std::io::{self, Read};

/// A stream of raw input chunks.
///
/// One chunk is whatever a single read returned: usually one key press,
/// possibly a paste.
pub trait InputSource {
    /// Block until the next chunk arrives.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Reads chunks from the process's standard input.
///
/// The terminal must already be in raw mode (see
/// [`TerminalGuard`](crate::terminal::TerminalGuard)) for key presses to
/// arrive unbuffered and unechoed.
pub struct StdinSource {
    stdin: io::Stdin,
    buf: Vec<u8>,
}

impl StdinSource {
    /// Create a source reading up to `buffer_size` bytes per chunk.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            stdin: io::stdin(),
            buf: vec![0; buffer_size.max(1)],
        }
    }
}

impl InputSource for StdinSource {
    fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>> {
        loop {
            match self.stdin.read(&mut self.buf) {
                Ok(0) => return Ok(None),
                Ok(n) => return Ok(Some(self.buf[..n].to_vec())),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

/// A fixed list of chunks, replayed in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    chunks: VecDeque<Vec<u8>>,
}

impl ScriptedSource {
    /// Create a source that yields `chunks` and then ends.
    pub fn new<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
        }
    }

    /// Chunks not yet read.
    pub fn remaining(&self) -> usize {
        self.chunks.len()
    }
}

impl InputSource for ScriptedSource {
    fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.chunks.pop_front())
    }
}
