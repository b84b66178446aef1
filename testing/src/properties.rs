//! Property-based testing strategies using proptest

use proptest::prelude::*;
use weather_report_pipeline::PipelineState;

/// Place names: one or two capitalized words
pub fn location() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,12}( [A-Z][a-z]{1,10})?"
}

/// Free-form queries, including empty and whitespace-only ones
pub fn free_text() -> impl Strategy<Value = String> {
    "[ -~]{0,80}"
}

/// States seeded from a generated location with the query template
pub fn templated_state() -> impl Strategy<Value = PipelineState> {
    location().prop_map(|location| PipelineState::for_location(&location))
}
