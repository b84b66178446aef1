//! Chat-completions request and response types

use crate::error::LlmError;
use crate::types::{FinishReason, Message, Role, Usage};
use serde::{Deserialize, Serialize};

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Request to create a chat completion
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "gpt-3.5-turbo")
    pub model: String,
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request with the default model and no sampling overrides
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Single user-message request
    #[must_use]
    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(vec![Message::user(text)])
    }

    /// Builder: Set model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder: Set temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builder: Set max tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Response from creating a chat completion
#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponse {
    /// Completion identifier
    #[serde(default)]
    pub id: String,
    /// Model that generated the response
    #[serde(default)]
    pub model: String,
    /// Generated choices
    pub choices: Vec<Choice>,
    /// Token usage statistics
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Text of the first choice, if any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }

    /// Consume the response and return the first choice's text
    ///
    /// # Errors
    ///
    /// Returns `LlmError::EmptyResponse` if there are no choices or the first
    /// choice has no content
    pub fn into_text(self) -> Result<String, LlmError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}

/// One generated alternative
#[derive(Clone, Debug, Deserialize)]
pub struct Choice {
    /// Position in the choice list
    #[serde(default)]
    pub index: u32,
    /// Generated message
    pub message: ResponseMessage,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

/// Message returned by the model. Content is null for pure tool-call replies.
#[derive(Clone, Debug, Deserialize)]
pub struct ResponseMessage {
    /// Role (always "assistant" for completions)
    pub role: Role,
    /// Text content
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_builder() {
        let req = ChatRequest::prompt("Hello")
            .with_model("gpt-4o-mini")
            .with_temperature(Some(0.2))
            .with_max_tokens(Some(256));

        assert_eq!(req.model, "gpt-4o-mini");
        assert_eq!(req.temperature, Some(0.2));
        assert_eq!(req.max_tokens, Some(256));
        assert_eq!(req.messages, vec![Message::user("Hello")]);
    }

    #[test]
    fn test_chat_request_defaults_skip_optional_fields() {
        let req = ChatRequest::prompt("Test");
        assert_eq!(req.model, DEFAULT_MODEL);

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Test"}]
            })
        );
    }

    #[test]
    fn test_response_text() {
        let response: ChatResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Paris"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 30, "completion_tokens": 1, "total_tokens": 31}
        }))
        .unwrap();

        assert_eq!(response.text(), Some("Paris"));
        assert_eq!(response.usage.as_ref().map(|u| u.total_tokens), Some(31));
        assert_eq!(response.into_text().unwrap(), "Paris");
    }

    #[test]
    fn test_response_without_content_is_empty() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert!(response.text().is_none());
        assert!(matches!(response.into_text(), Err(LlmError::EmptyResponse)));

        let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(matches!(response.into_text(), Err(LlmError::EmptyResponse)));
    }
}
