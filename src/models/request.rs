//! Wire types for the chat endpoint.

use serde::{Deserialize, Serialize};

use crate::models::ChatMessage;

/// Which assistant persona handles the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantKind {
    /// General health questions.
    Health,
    /// Meal and diet planning.
    Meal,
}

impl AssistantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistantKind::Health => "health",
            AssistantKind::Meal => "meal",
        }
    }
}

/// Request body for a streaming chat completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(rename = "type")]
    pub kind: AssistantKind,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>, kind: AssistantKind) -> Self {
        Self { messages, kind }
    }

    pub fn health(messages: Vec<ChatMessage>) -> Self {
        Self::new(messages, AssistantKind::Health)
    }

    pub fn meal(messages: Vec<ChatMessage>) -> Self {
        Self::new(messages, AssistantKind::Meal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_type_field() {
        let req = ChatRequest::health(vec![ChatMessage::user("hi")]);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "health");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
    }

    #[test]
    fn test_meal_kind() {
        let req = ChatRequest::meal(vec![]);
        assert_eq!(req.kind.as_str(), "meal");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "meal");
    }
}
