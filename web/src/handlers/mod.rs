//! HTTP request handlers.

pub mod api;
pub mod form;
pub mod health;

pub use api::{report, report_stream};
pub use form::{index, submit};
pub use health::health_check;

use crate::error::AppError;
use crate::page::EMPTY_LOCATION_MESSAGE;

/// Reject blank input; otherwise return the location with surrounding whitespace removed.
fn require_location(raw: &str) -> Result<&str, AppError> {
    let location = raw.trim();
    if location.is_empty() {
        return Err(AppError::validation(EMPTY_LOCATION_MESSAGE));
    }
    Ok(location)
}
