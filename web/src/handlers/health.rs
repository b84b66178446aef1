//! Health check endpoint.

use axum::http::StatusCode;

/// Liveness check.
///
/// Returns 200 OK to indicate the service is running. Neither remote
/// service is contacted.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
