//! Configuration for the pipeline's two remote services
//!
//! Values come from three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file (path in `WEATHER_REPORT_CONFIG`)
//! 3. Credential environment variables (`OPENAI_API_KEY`, `OPENWEATHERMAP_API_KEY`)
//!
//! Credentials are optional here. A missing key is not a configuration
//! error; the stage that needs it fails when first invoked.
//!
//! # Example
//!
//! ```toml
//! [llm]
//! model = "gpt-3.5-turbo"
//! temperature = 0.7
//!
//! [weather]
//! units = "metric"
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use weather_report_weather::Units;

/// Environment variable naming the TOML configuration file
pub const CONFIG_PATH_ENV: &str = "WEATHER_REPORT_CONFIG";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// HTTP client could not be built from the settings
    #[error("Failed to build client: {0}")]
    Client(String),
}

/// Language-model service settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// API key; normally supplied through `OPENAI_API_KEY`
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL of the chat-completions API
    pub api_url: String,
    /// Model name
    pub model: String,
    /// Sampling temperature, `None` for the service default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Completion token cap, `None` for no cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Per-request timeout in seconds, `None` to wait indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl LlmSettings {
    /// Validate language-model settings
    ///
    /// # Errors
    ///
    /// Returns error if a value is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::Validation("llm.model cannot be empty".to_string()));
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::Validation(
                    "llm.temperature must be between 0.0 and 2.0".to_string(),
                ));
            }
        }
        if self.max_tokens == Some(0) {
            return Err(ConfigError::Validation("llm.max_tokens must be > 0".to_string()));
        }
        validate_timeout("llm", self.timeout_secs)?;
        validate_url("llm", &self.api_url)
    }

    /// Request timeout as Duration
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: weather_report_llm::DEFAULT_API_URL.to_string(),
            model: weather_report_llm::DEFAULT_MODEL.to_string(),
            temperature: Some(0.7),
            max_tokens: None,
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmSettings")
            .field("api_key", &redacted(self.api_key.as_ref()))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather-data provider settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSettings {
    /// API key; normally supplied through `OPENWEATHERMAP_API_KEY`
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL of the provider API
    pub api_url: String,
    /// Unit system for lookups
    pub units: Units,
    /// Per-request timeout in seconds, `None` to wait indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl WeatherSettings {
    /// Validate weather-provider settings
    ///
    /// # Errors
    ///
    /// Returns error if a value is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_timeout("weather", self.timeout_secs)?;
        validate_url("weather", &self.api_url)
    }

    /// Request timeout as Duration
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: weather_report_weather::DEFAULT_API_URL.to_string(),
            units: Units::Metric,
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for WeatherSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherSettings")
            .field("api_key", &redacted(self.api_key.as_ref()))
            .field("api_url", &self.api_url)
            .field("units", &self.units)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Everything the pipeline runner needs to reach both services
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Language-model service
    pub llm: LlmSettings,
    /// Weather-data provider
    pub weather: WeatherSettings,
}

impl PipelineConfig {
    /// Load configuration from the process environment
    ///
    /// Reads the file named by `WEATHER_REPORT_CONFIG` if set, then applies
    /// credential environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or a value is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load(path.as_deref())
    }

    /// Load configuration from an optional file plus credential environment variables
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or a value is invalid
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Like [`PipelineConfig::load`] with an explicit variable lookup
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or a value is invalid
    pub fn load_with<F>(path: Option<&Path>, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_credentials(var);
        config.validate()?;

        tracing::debug!(
            model = %config.llm.model,
            units = %config.weather.units,
            llm_key = config.llm.api_key.is_some(),
            weather_key = config.weather.api_key.is_some(),
            "pipeline configuration loaded"
        );

        Ok(config)
    }

    /// Parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns error if the document does not match the schema
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Builder: set both credentials explicitly
    #[must_use]
    pub fn with_credentials(mut self, llm_key: Option<String>, weather_key: Option<String>) -> Self {
        self.llm.api_key = llm_key;
        self.weather.api_key = weather_key;
        self
    }

    /// Overwrite credentials with non-blank values from the variable lookup
    fn apply_credentials<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| var(name).filter(|value| !value.trim().is_empty());

        if let Some(key) = non_blank(weather_report_llm::API_KEY_ENV) {
            self.llm.api_key = Some(key);
        }
        if let Some(key) = non_blank(weather_report_weather::API_KEY_ENV) {
            self.weather.api_key = Some(key);
        }
    }

    /// Validate entire configuration
    ///
    /// # Errors
    ///
    /// Returns error if any section is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.llm.validate()?;
        self.weather.validate()?;
        Ok(())
    }
}

fn validate_timeout(section: &str, timeout_secs: Option<u64>) -> Result<(), ConfigError> {
    if timeout_secs == Some(0) {
        return Err(ConfigError::Validation(format!(
            "{section}.timeout_secs must be > 0"
        )));
    }
    Ok(())
}

fn validate_url(section: &str, url: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{section}.api_url must start with http:// or https://"
        )));
    }
    Ok(())
}

fn redacted(key: Option<&String>) -> Option<&'static str> {
    key.map(|_| "<redacted>")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;

    fn no_vars(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert_eq!(config.llm.temperature, Some(0.7));
        assert_eq!(config.llm.api_url, "https://api.openai.com/v1");
        assert_eq!(config.weather.units, Units::Metric);
        assert_eq!(config.weather.api_url, "https://api.openweathermap.org");
        assert!(config.llm.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_credentials_are_not_an_error() {
        let config = PipelineConfig::load_with(None, no_vars).unwrap();
        assert!(config.llm.api_key.is_none());
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn test_credentials_from_variables() {
        let config = PipelineConfig::load_with(None, |name| match name {
            "OPENAI_API_KEY" => Some("sk-test".to_string()),
            "OPENWEATHERMAP_API_KEY" => Some("   ".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PipelineConfig::from_toml_str(
            r#"
            [llm]
            model = "gpt-4o-mini"
            timeout_secs = 20

            [weather]
            units = "imperial"
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.temperature, Some(0.7));
        assert_eq!(config.llm.timeout(), Some(Duration::from_secs(20)));
        assert_eq!(config.weather.units, Units::Imperial);
        assert_eq!(config.weather.api_url, "https://api.openweathermap.org");
    }

    #[test]
    fn test_unknown_units_rejected() {
        let result = PipelineConfig::from_toml_str("[weather]\nunits = \"rankine\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation() {
        let mut llm = LlmSettings::default();
        llm.model = String::new();
        assert!(llm.validate().is_err());

        llm.model = "gpt-3.5-turbo".to_string();
        llm.temperature = Some(2.5);
        assert!(llm.validate().is_err());

        llm.temperature = None;
        llm.max_tokens = Some(0);
        assert!(llm.validate().is_err());

        llm.max_tokens = None;
        llm.api_url = "ftp://example.com".to_string();
        assert!(llm.validate().is_err());

        let mut weather = WeatherSettings::default();
        weather.timeout_secs = Some(0);
        assert!(weather.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = PipelineConfig::load_with(Some(Path::new("/nonexistent/weather.toml")), no_vars);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = PipelineConfig::default()
            .with_credentials(Some("sk-secret".to_string()), Some("owm-secret".to_string()));
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(!debug.contains("owm-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_serialized_config_omits_credentials() {
        let config = PipelineConfig::default().with_credentials(Some("sk-secret".to_string()), None);
        let text = toml::to_string(&config).unwrap();
        assert!(!text.contains("sk-secret"));
        assert!(text.contains("gpt-3.5-turbo"));
    }
}
