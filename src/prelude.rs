//! Prelude module for convenient imports.
//!
//! Re-exports the most frequently used types:
//!
//! ```ignore
//! use medivibe::prelude::*;
//! ```

// Chat client
pub use crate::chat::ChatClient;

// Model types
pub use crate::models::{AssistantKind, ChatMessage, ChatRequest, ChatRole, Conversation};

// Stream reading
pub use crate::sse::{ChunkProgress, DeltaStreamReader};

// Health tools
pub use crate::bmi::{bmi, BmiCategory, BmiReading};
pub use crate::booking::{BookingConfirmation, BookingForm};

// Errors
pub use crate::error::{ResultExt, VibeError, VibeResult};
