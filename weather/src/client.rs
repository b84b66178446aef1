//! OpenWeatherMap current-weather client

use crate::{
    error::WeatherError,
    model::{CurrentWeather, Units},
    report::format_report,
};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENWEATHERMAP_API_KEY";

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org";

/// Current-weather API client
///
/// Like the language-model client, a missing key only fails at call time.
#[derive(Clone)]
pub struct OpenWeatherMapClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
    units: Units,
}

impl OpenWeatherMapClient {
    /// Create a new client with the API key from `OPENWEATHERMAP_API_KEY`, if set
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
            units: Units::default(),
        }
    }

    /// Builder: point the client at another base URL
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: set the unit system
    #[must_use]
    pub const fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Builder: apply a total request timeout
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::RequestFailed` if the HTTP client cannot be built
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, WeatherError> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;
        Ok(self)
    }

    /// Whether an API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Unit system used for requests and reports
    #[must_use]
    pub const fn units(&self) -> Units {
        self.units
    }

    /// Fetch current conditions for a place name
    ///
    /// `location` is passed through untouched as the `q` parameter.
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::MissingApiKey` without touching the network when
    /// no key is configured, `WeatherError::LocationNotFound` when the provider
    /// does not know the place, and transport/API/parsing errors otherwise
    pub async fn current(&self, location: &str) -> Result<CurrentWeather, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let response = self
            .client
            .get(format!("{}/data/2.5/weather", self.api_url))
            .query(&[
                ("q", location),
                ("appid", api_key),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<CurrentWeather>()
                .await
                .map_err(|e| WeatherError::ResponseParseFailed(e.to_string())),
            StatusCode::NOT_FOUND => Err(WeatherError::LocationNotFound(location.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(WeatherError::RateLimited),
            StatusCode::UNAUTHORIZED => Err(WeatherError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(WeatherError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// Fetch current conditions and render them as a text report
    ///
    /// # Errors
    ///
    /// Same as [`OpenWeatherMapClient::current`]
    pub async fn report(&self, location: &str) -> Result<String, WeatherError> {
        let weather = self.current(location).await?;
        tracing::debug!(
            location,
            resolved = %weather.name,
            status = weather.detailed_status(),
            "weather lookup complete"
        );
        Ok(format_report(location, &weather, self.units))
    }
}

impl fmt::Debug for OpenWeatherMapClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherMapClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = OpenWeatherMapClient::new(Some("owm-key".to_string()));
        assert!(client.has_api_key());
        assert_eq!(client.units(), Units::Metric);
        assert_eq!(client.api_url, "https://api.openweathermap.org");
    }

    #[test]
    fn test_builders() {
        let client = OpenWeatherMapClient::new(None)
            .with_api_url("http://localhost:1234/")
            .with_units(Units::Imperial);
        assert!(!client.has_api_key());
        assert_eq!(client.api_url, "http://localhost:1234");
        assert_eq!(client.units(), Units::Imperial);
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = OpenWeatherMapClient::new(Some("owm-secret".to_string()));
        assert!(!format!("{client:?}").contains("owm-secret"));
    }

    #[test]
    fn test_missing_key_fails_before_request() {
        let client = OpenWeatherMapClient::new(None).with_api_url("http://127.0.0.1:9");
        let result = tokio_test::block_on(client.report("Paris"));
        assert!(matches!(result, Err(WeatherError::MissingApiKey)));
    }
}
