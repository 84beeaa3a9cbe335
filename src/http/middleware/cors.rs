//! CORS middleware.
//!
//! Every response carries a wildcard origin plus permissive method and
//! header allowances. `OPTIONS` requests are answered immediately with an
//! empty 200 and never reach the route table.

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue, Method, StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "*";

/// Short-circuit preflight requests.
pub async fn preflight(req: Request, next: Next) -> Response {
    if *req.method() == Method::OPTIONS {
        tracing::trace!(path = %req.uri().path(), "Preflight answered");
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}

/// Wrap `router` with the preflight short-circuit.
pub fn with_preflight(router: Router) -> Router {
    router.layer(middleware::from_fn(preflight))
}

/// Wrap `router` so every response carries the CORS headers.
pub fn with_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}
