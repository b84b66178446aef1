//! Error types for the weather-data client

use thiserror::Error;

/// Errors that can occur when looking up weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key was configured (`OPENWEATHERMAP_API_KEY`)
    #[error("Missing OPENWEATHERMAP_API_KEY: weather-provider credential is not configured")]
    MissingApiKey,

    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Provider does not know the requested place
    #[error("Location not found: {0}")]
    LocationNotFound(String),

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
}

impl WeatherError {
    /// Whether this error comes from missing or rejected credentials
    #[must_use]
    pub const fn is_credential_error(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::Unauthorized)
    }
}
