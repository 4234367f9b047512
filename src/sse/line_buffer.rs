//! Chunk accumulation and line extraction.
//!
//! Network chunks can split a logical line anywhere, including inside a
//! multi-byte character, so the pending buffer is kept as raw bytes and a
//! line is only decoded once its terminating newline has arrived.

/// Accumulates raw response bytes and hands out complete lines.
///
/// A line pushed back via [`LineBuffer::push_back`] becomes the *unconsumed
/// residue*: it is replayed ahead of the pending bytes, but only after more
/// data has arrived. This keeps the boundary between consumed and pending
/// input explicit instead of splicing text back into the buffer.
#[derive(Debug, Default)]
pub struct LineBuffer {
    /// Raw bytes not yet assembled into a complete line.
    pending: Vec<u8>,
    /// A previously extracted line awaiting reprocessing.
    residue: Option<String>,
    /// Set after a push-back; cleared when more bytes arrive.
    starved: bool,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw chunk. Unblocks residue replay.
    pub fn push_chunk(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);
        self.starved = false;
    }

    /// Extract the next complete line, without its newline and with a single
    /// trailing carriage-return stripped.
    ///
    /// Returns the residue line first if one is queued and new bytes have
    /// arrived since it was pushed back. Returns `None` while the residue is
    /// starved, even if complete lines sit behind it.
    pub fn next_line(&mut self) -> Option<String> {
        if self.residue.is_some() {
            if self.starved {
                return None;
            }
            return self.residue.take();
        }

        let newline = self.pending.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.pending.drain(..=newline).collect();
        line.pop(); // the newline itself
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    /// Re-queue a line at the front of the buffer and stop extraction until
    /// more bytes arrive.
    pub fn push_back(&mut self, line: String) {
        debug_assert!(self.residue.is_none(), "only one residue line at a time");
        self.residue = Some(line);
        self.starved = true;
    }

    /// Whether a pushed-back line is still waiting to be reprocessed.
    pub fn has_residue(&self) -> bool {
        self.residue.is_some()
    }

    /// Take whatever trails the last newline, for end-of-stream handling.
    pub fn take_partial(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let mut line = std::mem::take(&mut self.pending);
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.is_empty() {
            return None;
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.residue.is_none()
    }
}
