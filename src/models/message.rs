//! Chat messages and the conversation transcript.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// An ordered transcript with at most one in-progress assistant message.
///
/// While a response streams, the in-progress message is addressed by an
/// explicit handle rather than by peeking at the last element, so user
/// messages appended mid-stream can never be overwritten.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    in_progress: Option<usize>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages, in order. An in-progress assistant message is included
    /// with its content so far.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether an assistant response is currently streaming.
    pub fn in_progress(&self) -> bool {
        self.in_progress.is_some()
    }

    /// Append a user message. Any streaming assistant message is finalized
    /// first.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.finalize();
        self.messages.push(ChatMessage::user(content));
    }

    /// Start an assistant message that will be filled in as content streams.
    pub fn begin_assistant(&mut self) {
        self.finalize();
        self.messages.push(ChatMessage::assistant(""));
        self.in_progress = Some(self.messages.len() - 1);
    }

    /// Replace the in-progress assistant content with the latest running
    /// content. Returns false when no message is in progress.
    pub fn apply_content(&mut self, content: &str) -> bool {
        match self.in_progress {
            Some(idx) => {
                self.messages[idx].content.clear();
                self.messages[idx].content.push_str(content);
                true
            }
            None => false,
        }
    }

    /// Mark the in-progress assistant message as complete. A message that
    /// never received any content is removed rather than left empty.
    pub fn finalize(&mut self) {
        if let Some(idx) = self.in_progress.take() {
            if self.messages[idx].content.is_empty() {
                self.messages.remove(idx);
            }
        }
    }
}
