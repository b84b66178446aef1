//! Pipeline runner
//!
//! Drives the three stages in fixed order. Each run owns its state; the
//! runner itself holds only the two service handles, so one runner can serve
//! any number of concurrent runs.

use crate::config::{ConfigError, PipelineConfig};
use crate::environment::{ChatModel, LanguageModel, WeatherProvider, weather_client};
use crate::error::PipelineError;
use crate::stage::{Stage, StageOutput};
use crate::stages;
use crate::state::PipelineState;
use futures::Stream;
use weather_report_weather::OpenWeatherMapClient;

/// Runner wired to the production OpenAI and OpenWeatherMap clients
pub type DefaultPipeline = WeatherPipeline<ChatModel, OpenWeatherMapClient>;

/// Fixed three-stage weather pipeline
///
/// # Example
///
/// ```no_run
/// use weather_report_pipeline::{DefaultPipeline, PipelineConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = DefaultPipeline::from_config(&PipelineConfig::from_env()?)?;
/// let report = pipeline.run_for_location("Paris").await?;
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct WeatherPipeline<L, W> {
    llm: L,
    weather: W,
}

impl<L, W> WeatherPipeline<L, W> {
    /// Wire a runner from its two services
    #[must_use]
    pub const fn new(llm: L, weather: W) -> Self {
        Self { llm, weather }
    }

    /// Language-model service used by stages 1 and 3
    #[must_use]
    pub const fn llm(&self) -> &L {
        &self.llm
    }
}

impl DefaultPipeline {
    /// Build the production clients from configuration
    ///
    /// Missing credentials are accepted here; the stage that needs one fails
    /// when it runs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Client` if an HTTP client cannot be built
    pub fn from_config(config: &PipelineConfig) -> Result<Self, ConfigError> {
        let llm = ChatModel::from_settings(&config.llm)?;
        let weather = weather_client(&config.weather)?;
        Ok(Self::new(llm, weather))
    }
}

impl<L, W> WeatherPipeline<L, W>
where
    L: LanguageModel,
    W: WeatherProvider,
{
    /// Run all three stages and return the composed report
    ///
    /// # Errors
    ///
    /// Returns the first stage failure; later stages do not run
    #[tracing::instrument(skip_all, fields(query = %state.original_query()))]
    pub async fn run(&self, state: PipelineState) -> Result<String, PipelineError> {
        tracing::info!("Pipeline run started");

        let state = stages::extract_city(&self.llm, state).await?;
        let state = stages::fetch_weather(&self.weather, state).await?;
        let report = stages::compose_report(&self.llm, &state).await?;

        tracing::info!(entries = state.entry_count(), "Pipeline run completed");
        Ok(report)
    }

    /// Seed a state from `location` with the query template and run it
    ///
    /// # Errors
    ///
    /// Returns the first stage failure; later stages do not run
    pub async fn run_for_location(&self, location: &str) -> Result<String, PipelineError> {
        self.run(PipelineState::for_location(location)).await
    }

    /// Run all three stages, yielding each stage's output as it completes
    ///
    /// A successful run yields exactly three items in stage order. A failing
    /// stage yields its error as the last item.
    pub fn stream(
        &self,
        state: PipelineState,
    ) -> impl Stream<Item = Result<StageOutput, PipelineError>> + Send + '_ {
        async_stream::try_stream! {
            tracing::info!(query = %state.original_query(), "Pipeline stream started");

            let state = stages::extract_city(&self.llm, state).await?;
            yield StageOutput::new(Stage::CityExtractor, state.last_output());

            let state = stages::fetch_weather(&self.weather, state).await?;
            yield StageOutput::new(Stage::WeatherFetcher, state.last_output());

            let report = stages::compose_report(&self.llm, &state).await?;
            yield StageOutput::new(Stage::ReportComposer, report);
        }
    }

    /// Like [`WeatherPipeline::stream`], seeded from `location` with the query template
    pub fn stream_for_location(
        &self,
        location: &str,
    ) -> impl Stream<Item = Result<StageOutput, PipelineError>> + Send + '_ {
        self.stream(PipelineState::for_location(location))
    }
}
