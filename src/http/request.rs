//! Per-request middleware: access logging, the JSON body guard and the
//! request fault boundary.
//!
//! # Responsibilities
//! - Emit one log line per request before it is handled
//! - Record request metrics once the response is ready
//! - Reject malformed JSON bodies with a generic 500
//!
//! # Design Decisions
//! - The log line is written before dispatch so it appears even if the
//!   handler panics
//! - Only `application/json` bodies are inspected; other bodies pass through
//!   untouched
//! - The body is buffered once and re-attached for downstream handlers

use std::time::Instant;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, HeaderName},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::lifecycle::faults;
use crate::observability::metrics;

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Mark everything below this layer as request work, so a panic there is
/// answered with a 500 instead of ending the process.
pub async fn request_boundary(req: Request, next: Next) -> Response {
    faults::within_request_boundary(next.run(req)).await
}

/// Log the request, run it, then record its outcome.
pub async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let request_id = req
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_owned();

    tracing::info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        "Request received"
    );

    let response = next.run(req).await;
    let status = response.status();

    metrics::record_request(method.as_str(), status.as_u16(), start);
    tracing::debug!(
        request_id = %request_id,
        status = status.as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}

/// Parse `application/json` bodies up front; malformed or oversized bodies
/// never reach a handler.
pub async fn guard_json_body(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if !is_json(req.headers()) {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, state.ctx.config.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %parts.uri.path(), error = %e, "Failed to read request body");
            return ApiError::Internal.into_response();
        }
    };

    if !bytes.is_empty() {
        if let Err(e) = serde_json::from_slice::<serde_json::Value>(&bytes) {
            tracing::warn!(path = %parts.uri.path(), error = %e, "Malformed JSON body");
            return ApiError::Internal.into_response();
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// True when the `Content-Type` media type is `application/json`.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|media| media.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
