//! Error types for the chat-completions client

use thiserror::Error;

/// Errors that can occur when talking to the language-model service
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key was configured (`OPENAI_API_KEY`)
    #[error("Missing OPENAI_API_KEY: language-model credential is not configured")]
    MissingApiKey,

    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Rate limited - too many requests
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Unauthorized - invalid API key
    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    /// API returned an error
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },

    /// The completion carried no text
    #[error("Completion contained no text")]
    EmptyResponse,
}

impl LlmError {
    /// Whether this error comes from missing or rejected credentials
    #[must_use]
    pub const fn is_credential_error(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::Unauthorized)
    }
}
