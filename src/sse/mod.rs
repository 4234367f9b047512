//! SSE (Server-Sent Events) stream handling for chat responses.
//!
//! The chat backend streams OpenAI-style completion chunks, one JSON object
//! per `data: <json>` line, terminated by the `data: [DONE]` sentinel.
//! Comment lines (`:` prefix) are sent as keep-alives and ignored.
//!
//! # Module structure
//! - `line_buffer` - Chunk accumulation and line extraction (LineBuffer)
//! - `payload` - Completion-chunk payload deserialization
//! - `reader` - The incremental delta reader (DeltaStreamReader)

mod line_buffer;
mod payload;
mod reader;

pub use line_buffer::LineBuffer;
pub use payload::{
    parse_payload, ChunkChoice, ChunkDelta, CompletionChunk, DATA_PREFIX, DONE_SENTINEL,
};
pub use reader::{ChunkProgress, DeltaStreamReader, ReaderState};
