//! Pipeline failure type

use crate::stage::Stage;
use thiserror::Error;
use weather_report_llm::LlmError;
use weather_report_weather::WeatherError;

/// A stage failed; the remote error is carried as the source, untouched.
///
/// There is no recovery: the run that produced this error produced nothing
/// else, and later stages never ran.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A language-model call failed (stage 1 or 3)
    #[error("{stage} failed: {source}")]
    LanguageModel {
        /// Stage that issued the call
        stage: Stage,
        /// Error from the language-model client
        #[source]
        source: LlmError,
    },

    /// The weather lookup failed (stage 2)
    #[error("weather_fetcher failed: {0}")]
    Weather(#[source] WeatherError),
}

impl PipelineError {
    /// Stage that failed
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::LanguageModel { stage, .. } => *stage,
            Self::Weather(_) => Stage::WeatherFetcher,
        }
    }

    /// Missing or rejected credential for either service
    #[must_use]
    pub const fn is_credential_error(&self) -> bool {
        match self {
            Self::LanguageModel { source, .. } => source.is_credential_error(),
            Self::Weather(source) => source.is_credential_error(),
        }
    }

    /// Credential was never configured (as opposed to rejected by the service)
    #[must_use]
    pub const fn is_missing_credential(&self) -> bool {
        matches!(
            self,
            Self::LanguageModel {
                source: LlmError::MissingApiKey,
                ..
            } | Self::Weather(WeatherError::MissingApiKey)
        )
    }

    /// The weather provider did not know the extracted city
    #[must_use]
    pub const fn is_location_not_found(&self) -> bool {
        matches!(self, Self::Weather(WeatherError::LocationNotFound(_)))
    }
}
