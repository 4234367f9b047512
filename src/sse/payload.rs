//! Completion-chunk payload deserialization.
//!
//! Each `data:` line carries an OpenAI-style streaming chunk:
//!
//! ```json
//! {"choices":[{"delta":{"content":"He"}}]}
//! ```
//!
//! Only the first choice's content delta is consumed; everything else in the
//! payload is ignored.

use serde::Deserialize;

/// Prefix marking an event payload line.
pub const DATA_PREFIX: &str = "data: ";

/// Payload value signalling the end of the stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// One streamed completion chunk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: ChunkDelta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkDelta {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionChunk {
    /// The text delta of the first choice, if any.
    pub fn delta_content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.delta.content.as_deref())
    }
}

/// Parse one event payload into its optional content delta.
///
/// Returns `Err` only when the payload is not syntactically valid JSON (the
/// truncation case the reader recovers from). Valid JSON of an unexpected
/// shape yields `Ok(None)`: no content update, but not an error.
pub fn parse_payload(payload: &str) -> Result<Option<String>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    let chunk: CompletionChunk = match serde_json::from_value(value) {
        Ok(chunk) => chunk,
        Err(_) => return Ok(None),
    };
    Ok(chunk.delta_content().map(str::to_owned))
}
