//! OpenAI chat-completions client implementation

use crate::{
    error::LlmError,
    messages::{ChatRequest, ChatResponse},
};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// Chat-completions API client
///
/// The API key is optional at construction time. A client without a key can
/// be built and passed around; every call fails with
/// `LlmError::MissingApiKey` before any network I/O.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
}

impl OpenAiClient {
    /// Create a new client with the API key from `OPENAI_API_KEY`, if set
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    /// Create a new client with an explicit API key
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Builder: point the client at another base URL (proxies, test servers)
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: apply a total request timeout
    ///
    /// # Errors
    ///
    /// Returns `LlmError::RequestFailed` if the HTTP client cannot be built
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmError> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
        Ok(self)
    }

    /// Whether an API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Create a chat completion
    ///
    /// # Errors
    ///
    /// Returns `LlmError::MissingApiKey` without touching the network when no
    /// key is configured, and errors for network failures, API errors, or
    /// parsing failures otherwise
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<ChatResponse>()
                .await
                .map_err(|e| LlmError::ResponseParseFailed(e.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(LlmError::RateLimited),
            StatusCode::UNAUTHORIZED => Err(LlmError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(LlmError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// Create a chat completion and return the first choice's text
    ///
    /// # Errors
    ///
    /// Everything `chat` returns, plus `LlmError::EmptyResponse` when the
    /// completion carries no text
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let response = self.chat(request).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                model = %response.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "chat completion usage"
            );
        }

        response.into_text()
    }
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenAiClient::new(Some("test-key".to_string()));
        assert!(client.has_api_key());
        assert_eq!(client.api_url(), "https://api.openai.com/v1");
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        assert!(!OpenAiClient::new(Some("   ".to_string())).has_api_key());
        assert!(!OpenAiClient::new(None).has_api_key());
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let client = OpenAiClient::new(None).with_api_url("http://localhost:8080/v1/");
        assert_eq!(client.api_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = OpenAiClient::new(Some("sk-secret".to_string()));
        let debug = format!("{client:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_missing_key_fails_before_request() {
        // Unroutable URL: reaching the network would surface RequestFailed instead
        let client = OpenAiClient::new(None).with_api_url("http://127.0.0.1:9");
        let result = tokio_test::block_on(client.complete(&ChatRequest::prompt("Hello")));
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }
}
