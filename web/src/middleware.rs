//! Request-id middleware.
//!
//! # Flow
//!
//! 1. **Extract** the id from the `X-Request-ID` header, or generate a new UUID
//! 2. **Store** it in request extensions; handlers attach it to [`AppError`]s
//! 3. **Run** the request inside a span carrying the id
//! 4. **Echo** the id on the response `X-Request-ID` header
//!
//! Streamed responses outlive the span, so the SSE handler reports the id in
//! its `error` event instead.
//!
//! [`AppError`]: crate::error::AppError
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use weather_report_web::middleware::request_id_layer;
//!
//! let app = Router::new()
//!     .route("/health", get(health_check))
//!     .layer(request_id_layer());
//! ```

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    response::Response,
};
use serde::Serialize;
use std::fmt;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for the request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Request id stored in request extensions by [`RequestIdLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Id supplied by the client, or a fresh one if absent or not a UUID
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let supplied = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok());
        Self(supplied.unwrap_or_else(Uuid::new_v4))
    }

    fn header_value(self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.0.to_string()).ok()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Create a layer that tags every request with a request id.
#[must_use]
pub const fn request_id_layer() -> RequestIdLayer {
    RequestIdLayer
}

/// Layer for request id tracking.
#[derive(Clone, Debug)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdMiddleware { inner }
    }
}

/// Middleware service for request id tracking.
#[derive(Clone, Debug)]
pub struct RequestIdMiddleware<S> {
    inner: S,
}

impl<S> Service<Request> for RequestIdMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let request_id = RequestId::from_headers(req.headers());
        req.extensions_mut().insert(request_id);

        let span = tracing::info_span!(
            "http_request",
            request_id = %request_id,
            method = %req.method(),
            uri = %req.uri(),
        );

        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut response = fut.instrument(span).await?;
            if let Some(value) = request_id.header_value() {
                response.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Ok(response)
        })
    }
}
