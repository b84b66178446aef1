//! # Weather Report Testing
//!
//! Testing utilities for the weather report pipeline.
//!
//! This crate provides:
//! - Scripted doubles for the language-model and weather services
//! - Canned queries, weather text and wire payloads
//! - Property-based testing strategies
//! - A tracing subscriber for test output
//!
//! ## Example
//!
//! ```
//! use weather_report_pipeline::{PipelineState, WeatherPipeline};
//! use weather_report_testing::{ScriptedLanguageModel, ScriptedWeatherProvider, fixtures};
//!
//! let llm = ScriptedLanguageModel::new()
//!     .with_reply("Paris")
//!     .with_reply(fixtures::PARIS_FINAL_REPORT);
//! let weather = ScriptedWeatherProvider::new().with_report(fixtures::PARIS_WEATHER_REPORT);
//!
//! let pipeline = WeatherPipeline::new(llm.clone(), weather.clone());
//! let report = tokio_test::block_on(pipeline.run(PipelineState::new(fixtures::PARIS_QUERY))).unwrap();
//!
//! assert_eq!(report, fixtures::PARIS_FINAL_REPORT);
//! assert_eq!(weather.locations(), ["Paris"]);
//! ```

pub mod fixtures;
pub mod properties;
pub mod scripted;

pub use scripted::{Call, CallLog, ScriptedLanguageModel, ScriptedWeatherProvider};

/// Install a test-writer tracing subscriber honoring `RUST_LOG`
///
/// Safe to call from every test; only the first call installs.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
