//! Remote-service seams
//!
//! The runner talks to its two services through these traits so tests can
//! substitute scripted doubles. The production implementations wrap the
//! OpenAI and OpenWeatherMap clients.
//!
//! **Edition 2024**: the traits use RPITIT, so implementors may write
//! `async fn` directly.

use crate::config::{ConfigError, LlmSettings, WeatherSettings};
use weather_report_llm::{ChatRequest, LlmError, OpenAiClient};
use weather_report_weather::{OpenWeatherMapClient, WeatherError};

/// Text-in, text-out language-model service
pub trait LanguageModel: Send + Sync {
    /// Send `prompt` and return the model's raw reply
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged (transport, authentication, API)
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// Location-in, text-out weather provider
pub trait WeatherProvider: Send + Sync {
    /// Look `location` up and return the provider's report text
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged (unknown location, transport, API)
    fn lookup(&self, location: &str) -> impl Future<Output = Result<String, WeatherError>> + Send;
}

/// Production language model: chat-completions client plus sampling settings
#[derive(Clone, Debug)]
pub struct ChatModel {
    client: OpenAiClient,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl ChatModel {
    /// Wrap a client with explicit sampling settings
    #[must_use]
    pub fn new(client: OpenAiClient, model: impl Into<String>, temperature: Option<f32>) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
            max_tokens: None,
        }
    }

    /// Build the client and settings from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Client` if the HTTP client cannot be built
    pub fn from_settings(settings: &LlmSettings) -> Result<Self, ConfigError> {
        let mut client = OpenAiClient::new(settings.api_key.clone()).with_api_url(&settings.api_url);
        if let Some(timeout) = settings.timeout() {
            client = client
                .with_timeout(timeout)
                .map_err(|e| ConfigError::Client(e.to_string()))?;
        }

        Ok(Self {
            client,
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }

    /// Model name sent with every request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request(&self, prompt: &str) -> ChatRequest {
        ChatRequest::prompt(prompt)
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }
}

impl LanguageModel for ChatModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.client.complete(&self.request(prompt)).await
    }
}

impl WeatherProvider for OpenWeatherMapClient {
    async fn lookup(&self, location: &str) -> Result<String, WeatherError> {
        self.report(location).await
    }
}

/// Build the production weather client from configuration
///
/// # Errors
///
/// Returns `ConfigError::Client` if the HTTP client cannot be built
pub fn weather_client(settings: &WeatherSettings) -> Result<OpenWeatherMapClient, ConfigError> {
    let client = OpenWeatherMapClient::new(settings.api_key.clone())
        .with_api_url(&settings.api_url)
        .with_units(settings.units);

    match settings.timeout() {
        Some(timeout) => client
            .with_timeout(timeout)
            .map_err(|e| ConfigError::Client(e.to_string())),
        None => Ok(client),
    }
}
