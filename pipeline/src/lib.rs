//! # Weather report pipeline
//!
//! Turns a free-text location query into a readable weather report by
//! chaining three remote calls:
//!
//! 1. **City extractor**: the language model pulls the city name out of the query
//! 2. **Weather fetcher**: the weather provider looks that city up
//! 3. **Report composer**: the language model writes the report from the
//!    original query and the weather data
//!
//! The stages share one [`PipelineState`], an append-only record seeded with
//! the query. Stages read only its first and last entries.
//!
//! ## Entry points
//!
//! - [`WeatherPipeline::run`]: drive all three stages, return the report
//! - [`WeatherPipeline::stream`]: same, yielding each stage's labeled output
//!   as it completes
//!
//! Failures are never retried or recovered. The first failing stage ends the
//! run and its error reaches the caller with the remote error as its source.
//!
//! ## Example
//!
//! ```no_run
//! use futures::StreamExt;
//! use weather_report_pipeline::{DefaultPipeline, PipelineConfig, PipelineState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = DefaultPipeline::from_config(&PipelineConfig::from_env()?)?;
//!
//! let mut outputs = std::pin::pin!(pipeline.stream(PipelineState::for_location("Toronto")));
//! while let Some(output) = outputs.next().await {
//!     let output = output?;
//!     println!("{}: {}", output.stage, output.output);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod prompts;
pub mod runner;
pub mod stage;
pub mod stages;
pub mod state;

pub use config::{CONFIG_PATH_ENV, ConfigError, LlmSettings, PipelineConfig, WeatherSettings};
pub use environment::{ChatModel, LanguageModel, WeatherProvider, weather_client};
pub use error::PipelineError;
pub use runner::{DefaultPipeline, WeatherPipeline};
pub use stage::{Stage, StageOutput};
pub use state::{PipelineState, QUERY_TEMPLATE, SMOKE_TEST_QUERY};
