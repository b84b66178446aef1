//! Core types for the chat-completions API

use serde::{Deserialize, Serialize};

/// A message sent to the model
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,
    /// Text content
    pub content: String,
}

impl Message {
    /// Create a system message
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: text.into(),
        }
    }

    /// Create a user message
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }
}

/// Message role
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
    /// Tool output
    Tool,
}

/// Why the model stopped generating
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of the completion
    Stop,
    /// Hit the token limit
    Length,
    /// Output withheld by the content filter
    ContentFilter,
    /// Model requested tool calls
    ToolCalls,
    /// Any reason this client does not know about
    #[serde(other)]
    Other,
}

/// Token usage statistics
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Sum of both
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        assert_eq!(Message::user("Hello").role, Role::User);
        assert_eq!(Message::system("Be brief").role, Role::System);

        let msg = Message::assistant("Hi there");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "Hi there");
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_unknown_finish_reason() {
        let reason: FinishReason = serde_json::from_str(r#""function_call""#).unwrap();
        assert_eq!(reason, FinishReason::Other);

        let reason: FinishReason = serde_json::from_str(r#""stop""#).unwrap();
        assert_eq!(reason, FinishReason::Stop);
    }
}
