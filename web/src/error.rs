//! Error types for web handlers.
//!
//! [`AppError`] bridges pipeline failures and HTTP responses. JSON routes
//! return it directly; the HTML form renders its status and message into the
//! page instead. Handlers tag errors with the request's [`RequestId`] so the
//! log line and the client-visible body can be matched up.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use crate::middleware::RequestId;
use std::fmt;
use weather_report_pipeline::PipelineError;

/// Application error type for web handlers.
///
/// | Failure | Status | Code |
/// |---------|--------|------|
/// | Empty location | 422 | `VALIDATION_ERROR` |
/// | Credential not configured | 503 | `SERVICE_UNAVAILABLE` |
/// | Unknown location | 404 | `LOCATION_NOT_FOUND` |
/// | Any other stage failure | 502 | `UPSTREAM_ERROR` |
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code (for client error handling)
    code: &'static str,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
    /// Request the error belongs to
    request_id: Option<RequestId>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: &'static str) -> Self {
        Self {
            status,
            message,
            code,
            source: None,
            request_id: None,
        }
    }

    /// Create a new error with a source error.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Tag the error with the request it belongs to.
    #[must_use]
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Create a 422 Unprocessable Entity error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message.into(), "VALIDATION_ERROR")
    }

    /// Create a 404 error for a place the weather provider does not know.
    #[must_use]
    pub fn location_not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message.into(), "LOCATION_NOT_FOUND")
    }

    /// Create a 502 Bad Gateway error for a failed remote call.
    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message.into(), "UPSTREAM_ERROR")
    }

    /// Create a 503 Service Unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message.into(), "SERVICE_UNAVAILABLE")
    }

    /// HTTP status code
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// User-facing message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Request the error belongs to, if tagged
    #[must_use]
    pub const fn request_id(&self) -> Option<RequestId> {
        self.request_id
    }

    /// Log at a level matching the status
    pub(crate) fn log(&self) {
        let source = self.source.as_ref().map(|e| format!("{e:#}"));
        let request_id = self.request_id.map(|id| id.to_string());
        if self.status.is_server_error() {
            tracing::error!(
                request_id = request_id.as_deref(),
                status = %self.status,
                code = self.code,
                message = %self.message,
                error = source.as_deref(),
                "Request failed"
            );
        } else {
            tracing::warn!(
                request_id = request_id.as_deref(),
                status = %self.status,
                code = self.code,
                message = %self.message,
                "Request rejected"
            );
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse<'a> {
    /// Error code (for client error handling).
    pub code: &'a str,
    /// Human-readable error message.
    pub message: &'a str,
    /// Request id, when the handler tagged the error with one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

impl<'a> From<&'a AppError> for ErrorResponse<'a> {
    fn from(err: &'a AppError) -> Self {
        Self {
            code: err.code,
            message: &err.message,
            request_id: err.request_id,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(ErrorResponse::from(&self));
        (self.status, body).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        let stage = err.stage();
        let error = if err.is_missing_credential() {
            Self::unavailable(format!("{stage}: service credential is not configured"))
        } else if err.is_location_not_found() {
            Self::location_not_found(err.to_string())
        } else {
            Self::upstream(err.to_string())
        };
        error.with_source(anyhow::Error::new(err))
    }
}
