//! HTML form handlers.

use super::require_location;
use crate::error::AppError;
use crate::middleware::RequestId;
use crate::page::{self, Outcome};
use crate::state::AppState;
use axum::{Extension, Form, extract::State, http::StatusCode, response::Html};
use serde::Deserialize;
use weather_report_pipeline::{LanguageModel, WeatherProvider};

/// Submitted form fields
#[derive(Debug, Deserialize)]
pub struct LocationForm {
    /// Free-form location text
    #[serde(default)]
    pub location: String,
}

/// Render the empty form.
///
/// # Endpoint
///
/// ```text
/// GET /
/// ```
#[allow(clippy::unused_async)]
pub async fn index() -> Html<String> {
    Html(page::render("", &Outcome::Empty))
}

/// Run the pipeline for the submitted location and render the result.
///
/// Failures are rendered into the page with the mapped status code and logged
/// with the request id.
///
/// # Endpoint
///
/// ```text
/// POST /weather
/// Content-Type: application/x-www-form-urlencoded
///
/// location=Paris
/// ```
pub async fn submit<L, W>(
    State(state): State<AppState<L, W>>,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<LocationForm>,
) -> (StatusCode, Html<String>)
where
    L: LanguageModel + 'static,
    W: WeatherProvider + 'static,
{
    let result = match require_location(&form.location) {
        Ok(location) => state
            .pipeline()
            .run_for_location(location)
            .await
            .map_err(AppError::from),
        Err(err) => Err(err),
    };

    match result {
        Ok(report) => (
            StatusCode::OK,
            Html(page::render(&form.location, &Outcome::Report(report))),
        ),
        Err(err) => {
            let err = err.with_request_id(request_id);
            err.log();
            (
                err.status(),
                Html(page::render(
                    &form.location,
                    &Outcome::Error(err.message().to_string()),
                )),
            )
        }
    }
}
