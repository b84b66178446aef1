//! Axum web surface for the weather report pipeline.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/` | empty location form |
//! | `POST` | `/weather` | form submission, renders the report |
//! | `POST` | `/api/v1/report` | JSON report |
//! | `GET` | `/api/v1/report/stream` | per-stage Server-Sent Events |
//! | `GET` | `/health` | liveness |
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives and is tagged with a request id
//! 2. **Extract** the location from the form, JSON body or query string
//! 3. **Seed** a pipeline state with the templated query
//! 4. **Run** (or stream) the pipeline
//! 5. **Map** the result or the failing stage's error to a response
//!
//! # Example
//!
//! ```no_run
//! use weather_report_pipeline::{DefaultPipeline, PipelineConfig};
//! use weather_report_web::{AppState, router};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = DefaultPipeline::from_config(&PipelineConfig::from_env()?)?;
//! let app = router(AppState::new(pipeline));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod page;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use weather_report_pipeline::{LanguageModel, WeatherProvider};

// Re-export key types for convenience
pub use error::AppError;
pub use middleware::{REQUEST_ID_HEADER, RequestId, request_id_layer};
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;

/// Build the application router with tracing and request-id layers.
pub fn router<L, W>(state: AppState<L, W>) -> Router
where
    L: LanguageModel + 'static,
    W: WeatherProvider + 'static,
{
    Router::new()
        .route("/", get(handlers::index))
        .route("/weather", post(handlers::submit::<L, W>))
        .route("/api/v1/report", post(handlers::report::<L, W>))
        .route("/api/v1/report/stream", get(handlers::report_stream::<L, W>))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
