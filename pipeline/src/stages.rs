//! The three stage functions
//!
//! Each stage reads the state it needs, makes exactly one remote call, and
//! either appends its output or fails. A failing stage leaves the state it
//! received untouched.
//!
//! | Stage | Reads | Calls | Appends |
//! |-------|-------|-------|---------|
//! | `city_extractor` | last entry (the query) | language model | city name |
//! | `weather_fetcher` | last entry (the city) | weather provider | weather text |
//! | `report_composer` | first and last entries | language model | (returns report) |

use crate::environment::{LanguageModel, WeatherProvider};
use crate::error::PipelineError;
use crate::prompts;
use crate::stage::Stage;
use crate::state::PipelineState;

/// Stage 1: ask the language model for the city named in the last entry
///
/// The reply is appended as-is, without trimming or validation.
///
/// # Errors
///
/// Returns `PipelineError::LanguageModel` if the model call fails
#[tracing::instrument(skip_all, fields(stage = %Stage::CityExtractor))]
pub async fn extract_city<L: LanguageModel>(
    llm: &L,
    mut state: PipelineState,
) -> Result<PipelineState, PipelineError> {
    let prompt = prompts::extract_city(state.last_output());

    let city = llm
        .complete(&prompt)
        .await
        .map_err(|source| PipelineError::LanguageModel {
            stage: Stage::CityExtractor,
            source,
        })?;

    tracing::debug!(city = %city, "City extracted");
    tracing::info!(bytes = city.len(), "Stage completed");
    state.append(city);
    Ok(state)
}

/// Stage 2: look up the weather for the last entry
///
/// The last entry goes to the provider unsanitized.
///
/// # Errors
///
/// Returns `PipelineError::Weather` if the lookup fails
#[tracing::instrument(skip_all, fields(stage = %Stage::WeatherFetcher))]
pub async fn fetch_weather<W: WeatherProvider>(
    weather: &W,
    mut state: PipelineState,
) -> Result<PipelineState, PipelineError> {
    let report = weather
        .lookup(state.last_output())
        .await
        .map_err(PipelineError::Weather)?;

    tracing::info!(bytes = report.len(), "Stage completed");
    state.append(report);
    Ok(state)
}

/// Stage 3: compose the final report from the first and last entries
///
/// The result is returned rather than appended; it is the run's output.
///
/// # Errors
///
/// Returns `PipelineError::LanguageModel` if the model call fails
#[tracing::instrument(skip_all, fields(stage = %Stage::ReportComposer))]
pub async fn compose_report<L: LanguageModel>(
    llm: &L,
    state: &PipelineState,
) -> Result<String, PipelineError> {
    let prompt = prompts::compose_report(state.original_query(), state.last_output());

    let report = llm
        .complete(&prompt)
        .await
        .map_err(|source| PipelineError::LanguageModel {
            stage: Stage::ReportComposer,
            source,
        })?;

    tracing::info!(bytes = report.len(), "Stage completed");
    Ok(report)
}
