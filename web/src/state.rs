//! Application state for Axum handlers.

use std::sync::Arc;
use weather_report_pipeline::WeatherPipeline;

/// State shared across all HTTP handlers.
///
/// Holds the one pipeline runner every request goes through. Each request
/// seeds its own pipeline state, so concurrent requests share nothing else.
pub struct AppState<L, W> {
    pipeline: Arc<WeatherPipeline<L, W>>,
}

impl<L, W> AppState<L, W> {
    /// Create state around a runner.
    #[must_use]
    pub fn new(pipeline: WeatherPipeline<L, W>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Shared runner.
    #[must_use]
    pub const fn pipeline(&self) -> &Arc<WeatherPipeline<L, W>> {
        &self.pipeline
    }
}

// Manual impl: cloning shares the runner, so `L` and `W` need not be `Clone`.
impl<L, W> Clone for AppState<L, W> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}
