//! Domain models for conversations and chat requests.

mod message;
mod request;

pub use message::{ChatMessage, ChatRole, Conversation};
pub use request::{AssistantKind, ChatRequest};
