//! JSON and Server-Sent Events API.

use super::require_location;
use crate::WebResult;
use crate::error::{AppError, ErrorResponse};
use crate::middleware::RequestId;
use crate::state::AppState;
use axum::{
    Extension, Json,
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use weather_report_pipeline::{LanguageModel, PipelineState, WeatherProvider};

/// Location to report on, as JSON body or query string
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    /// Free-form location text
    #[serde(default)]
    pub location: String,
}

/// Composed report
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportResponse {
    /// Location as submitted
    pub location: String,
    /// Templated query the run was seeded with
    pub query: String,
    /// Final report text
    pub report: String,
}

/// Run the pipeline and return the report.
///
/// # Endpoint
///
/// ```text
/// POST /api/v1/report
/// Content-Type: application/json
///
/// { "location": "Paris" }
/// ```
///
/// # Errors
///
/// Returns `AppError` for an empty location or a failed stage, tagged with the
/// request id
pub async fn report<L, W>(
    State(state): State<AppState<L, W>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ReportRequest>,
) -> WebResult<Json<ReportResponse>>
where
    L: LanguageModel + 'static,
    W: WeatherProvider + 'static,
{
    run_report(&state, &request.location)
        .await
        .map(Json)
        .map_err(|err| err.with_request_id(request_id))
}

async fn run_report<L, W>(state: &AppState<L, W>, raw_location: &str) -> WebResult<ReportResponse>
where
    L: LanguageModel + 'static,
    W: WeatherProvider + 'static,
{
    let location = require_location(raw_location)?;
    let seed = PipelineState::for_location(location);
    let query = seed.original_query().to_string();

    let report = state.pipeline().run(seed).await?;

    Ok(ReportResponse {
        location: location.to_string(),
        query,
        report,
    })
}

/// Stream each stage's output as it completes.
///
/// Emits one `stage` event per completed stage with `{ "stage", "output" }`.
/// A failing stage emits one `error` event with
/// `{ "code", "message", "request_id" }` and ends the stream.
///
/// # Endpoint
///
/// ```text
/// GET /api/v1/report/stream?location=Paris
/// ```
///
/// # Errors
///
/// Returns `AppError` for an empty location, before the stream starts
pub async fn report_stream<L, W>(
    State(state): State<AppState<L, W>>,
    Extension(request_id): Extension<RequestId>,
    Query(request): Query<ReportRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError>
where
    L: LanguageModel + 'static,
    W: WeatherProvider + 'static,
{
    let location =
        require_location(&request.location).map_err(|err| err.with_request_id(request_id))?;
    let seed = PipelineState::for_location(location);
    let pipeline = Arc::clone(state.pipeline());

    let events = async_stream::stream! {
        let mut outputs = std::pin::pin!(pipeline.stream(seed));
        while let Some(item) = outputs.next().await {
            match item {
                Ok(output) => yield Ok::<_, Infallible>(json_event("stage", &output)),
                Err(err) => {
                    let err = AppError::from(err).with_request_id(request_id);
                    err.log();
                    yield Ok::<_, Infallible>(json_event("error", &ErrorResponse::from(&err)));
                    break;
                }
            }
        }
    };

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

fn json_event<T: Serialize>(name: &str, payload: &T) -> Event {
    Event::default()
        .event(name)
        .json_data(payload)
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Failed to encode event payload");
            Event::default().event("error").data("failed to encode event")
        })
}
