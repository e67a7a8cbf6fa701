//! Wire types for the hosted chat-completion API
//!
//! Request shapes serialize directly into the API's JSON; responses are
//! parsed by the client rather than deserialized, so partial bodies degrade
//! gracefully.

use serde::{Deserialize, Serialize};

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a chat-completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request for one chat completion
///
/// `model` and `max_tokens` are optional overrides; when absent the client
/// fills them from its configuration.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message to the request
    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Add a system message
    pub fn with_system_message(self, content: impl Into<String>) -> Self {
        self.with_message(ChatMessage::system(content))
    }

    /// Add a user message
    pub fn with_user_message(self, content: impl Into<String>) -> Self {
        self.with_message(ChatMessage::user(content))
    }

    /// Override the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override max tokens for this request
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Default)]
pub struct ChatResponse {
    pub content: String,
    pub finish_reason: FinishReason,
    pub usage: Usage,
}

/// Reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinishReason {
    #[default]
    Stop,
    Length,
    ContentFilter,
}

/// Token usage statistics reported by the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl Usage {
    /// Create new usage stats
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
        }
    }

    /// Total tokens across prompt and completion
    pub fn total(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_role_deserialization() {
        let system: Role = serde_json::from_str("\"system\"").unwrap();
        let user: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(system, Role::System);
        assert_eq!(user, Role::User);
    }

    #[test]
    fn test_message_constructors() {
        let system = ChatMessage::system("You are helpful");
        let user = ChatMessage::user("Hello");
        let assistant = ChatMessage::assistant("Hi there");

        assert_eq!(system.role, Role::System);
        assert_eq!(system.content, "You are helpful");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "Hello");
        assert_eq!(assistant.role, Role::Assistant);
        assert_eq!(assistant.content, "Hi there");
    }

    #[test]
    fn test_message_serialization() {
        let msg = ChatMessage::user("Hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "Hello");
    }

    #[test]
    fn test_chat_request_default() {
        let req = ChatRequest::new();
        assert!(req.messages.is_empty());
        assert!(req.model.is_none());
        assert!(req.max_tokens.is_none());
    }

    #[test]
    fn test_chat_request_builder() {
        let req = ChatRequest::new()
            .with_system_message("Summarize the following civic complaint:\n")
            .with_user_message("The streetlight on 5th Ave has been out for weeks.")
            .with_max_tokens(256);

        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.messages[1].role, Role::User);
        assert_eq!(req.max_tokens, Some(256));
        assert!(req.model.is_none());
    }

    #[test]
    fn test_chat_request_model_override() {
        let req = ChatRequest::new().with_model("gpt-4o");
        assert_eq!(req.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_finish_reason_default() {
        assert_eq!(FinishReason::default(), FinishReason::Stop);
    }

    #[test]
    fn test_usage_total() {
        let usage = Usage::new(100, 50);
        assert_eq!(usage.total(), 150);
    }

    #[test]
    fn test_chat_response_default() {
        let resp = ChatResponse::default();
        assert!(resp.content.is_empty());
        assert_eq!(resp.finish_reason, FinishReason::Stop);
        assert_eq!(resp.usage.total(), 0);
    }
}
