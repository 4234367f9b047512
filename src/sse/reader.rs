//! The incremental delta reader.
//!
//! Feeds raw response chunks through the [`LineBuffer`], filters event lines,
//! folds content deltas into a running message, and reports each update to a
//! caller-supplied sink with the **full accumulated content** (not just the
//! delta).

use tracing::{debug, warn};

use crate::error::StreamError;
use crate::sse::line_buffer::LineBuffer;
use crate::sse::payload::{parse_payload, DATA_PREFIX, DONE_SENTINEL};

/// How many times a pushed-back line may be replayed before it is treated as
/// corrupt rather than truncated.
const MAX_MALFORMED_REPLAYS: u32 = 8;

/// Upper bound on a single payload line. Anything larger is corrupt.
const MAX_LINE_BYTES: usize = 64 * 1024;

/// Reader lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Waiting for more transport bytes.
    AwaitingChunk,
    /// Sentinel seen or transport exhausted cleanly.
    Done,
    /// A fatal stream error was reported.
    Failed,
}

/// Outcome of feeding one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkProgress {
    /// More chunks are needed.
    NeedMore,
    /// The `[DONE]` sentinel was seen; stop reading the transport.
    Done,
}

/// Incremental reader for one streaming chat response.
///
/// Owns the pending buffer and the accumulated content for exactly one HTTP
/// response. A payload line that fails to parse is assumed to be truncated
/// and is pushed back to await more bytes; the replay budget bounds that
/// heuristic so a genuinely corrupt line fails the stream instead of being
/// reprocessed forever.
#[derive(Debug, Default)]
pub struct DeltaStreamReader {
    lines: LineBuffer,
    content: String,
    replays: u32,
    done: bool,
    failed: bool,
}

impl DeltaStreamReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full content accumulated so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume the reader, yielding the accumulated content.
    pub fn into_content(self) -> String {
        self.content
    }

    pub fn state(&self) -> ReaderState {
        if self.failed {
            ReaderState::Failed
        } else if self.done {
            ReaderState::Done
        } else {
            ReaderState::AwaitingChunk
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feed one transport chunk, extracting as many complete lines as
    /// possible. The sink receives the full running content after every
    /// successful append.
    pub fn feed_chunk<F>(&mut self, chunk: &[u8], sink: &mut F) -> Result<ChunkProgress, StreamError>
    where
        F: FnMut(&str),
    {
        if self.done {
            return Ok(ChunkProgress::Done);
        }
        self.lines.push_chunk(chunk);

        while let Some(line) = self.lines.next_line() {
            match self.consume_line(line, sink)? {
                LineOutcome::Continue => {}
                LineOutcome::Starved => return Ok(ChunkProgress::NeedMore),
                LineOutcome::Done => return Ok(ChunkProgress::Done),
            }
        }
        Ok(ChunkProgress::NeedMore)
    }

    /// Signal end of transport. Processes any final partial line, and reports
    /// a residue line that never became parseable as a fatal error.
    pub fn finish<F>(&mut self, sink: &mut F) -> Result<(), StreamError>
    where
        F: FnMut(&str),
    {
        if self.done {
            return Ok(());
        }
        if self.lines.has_residue() {
            self.failed = true;
            return Err(StreamError::MalformedPayload {
                payload: "<unconsumed line>".to_string(),
                message: "payload still unparseable at end of stream".to_string(),
            });
        }
        if let Some(line) = self.lines.take_partial() {
            match self.consume_final_line(line, sink) {
                Ok(()) => {}
                Err(e) => {
                    self.failed = true;
                    return Err(e);
                }
            }
        }
        self.done = true;
        debug!(content_len = self.content.len(), "stream complete");
        Ok(())
    }

    fn consume_line<F>(&mut self, line: String, sink: &mut F) -> Result<LineOutcome, StreamError>
    where
        F: FnMut(&str),
    {
        if line.trim().is_empty() || line.starts_with(':') {
            self.replays = 0;
            return Ok(LineOutcome::Continue);
        }
        let payload = match line.strip_prefix(DATA_PREFIX) {
            Some(rest) => rest.trim(),
            None => {
                self.replays = 0;
                return Ok(LineOutcome::Continue);
            }
        };
        if payload == DONE_SENTINEL {
            self.done = true;
            self.replays = 0;
            debug!(content_len = self.content.len(), "done sentinel received");
            return Ok(LineOutcome::Done);
        }

        match parse_payload(payload) {
            Ok(Some(delta)) => {
                self.content.push_str(&delta);
                sink(&self.content);
                self.replays = 0;
                Ok(LineOutcome::Continue)
            }
            Ok(None) => {
                self.replays = 0;
                Ok(LineOutcome::Continue)
            }
            Err(e) => {
                if self.replays >= MAX_MALFORMED_REPLAYS || line.len() > MAX_LINE_BYTES {
                    self.failed = true;
                    return Err(StreamError::MalformedPayload {
                        payload: truncate_for_report(payload),
                        message: e.to_string(),
                    });
                }
                self.replays += 1;
                warn!(replays = self.replays, "unparseable payload line, awaiting more bytes");
                self.lines.push_back(line);
                Ok(LineOutcome::Starved)
            }
        }
    }

    /// A trailing line with no newline can never be completed, so a parse
    /// failure here is immediately fatal.
    fn consume_final_line<F>(&mut self, line: String, sink: &mut F) -> Result<(), StreamError>
    where
        F: FnMut(&str),
    {
        if line.trim().is_empty() || line.starts_with(':') {
            return Ok(());
        }
        let payload = match line.strip_prefix(DATA_PREFIX) {
            Some(rest) => rest.trim(),
            None => return Ok(()),
        };
        if payload == DONE_SENTINEL {
            return Ok(());
        }
        match parse_payload(payload) {
            Ok(Some(delta)) => {
                self.content.push_str(&delta);
                sink(&self.content);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => Err(StreamError::MalformedPayload {
                payload: truncate_for_report(payload),
                message: e.to_string(),
            }),
        }
    }
}

enum LineOutcome {
    Continue,
    Starved,
    Done,
}

fn truncate_for_report(payload: &str) -> String {
    const REPORT_LIMIT: usize = 256;
    if payload.len() <= REPORT_LIMIT {
        payload.to_string()
    } else {
        let mut end = REPORT_LIMIT;
        while !payload.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &payload[..end])
    }
}
