//! Static endpoint handlers and the dispatch fallback.

use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::context::ServiceContext;
use crate::http::response::{timestamp, ApiError, HealthResponse, RootResponse};
use crate::http::server::AppState;
use crate::routing::Endpoint;

/// Single entry point for every request that survives the middleware stack.
/// Looks the request up in the route table and renders the endpoint.
pub async fn dispatch(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    match state.routes.match_route(&method, uri.path()) {
        Some(route) => {
            tracing::trace!(route = route.name, "Route matched");
            match route.endpoint {
                Endpoint::Root => Json(root(&state.ctx)).into_response(),
                Endpoint::Health => Json(health(&state.ctx)).into_response(),
            }
        }
        None => {
            tracing::debug!(method = %method, path = %uri.path(), "No route matched");
            ApiError::NotFound {
                method: method.to_string(),
                path: uri.path().to_string(),
            }
            .into_response()
        }
    }
}

pub fn root(ctx: &ServiceContext) -> RootResponse {
    RootResponse {
        status: "ok",
        message: "Server is running",
        timestamp: timestamp(),
        version: ctx.version,
        platform: ctx.platform,
        environment: ctx.config.app_env.clone(),
        uptime: ctx.uptime().as_secs_f64(),
        memory: ctx.memory(),
    }
}

pub fn health(ctx: &ServiceContext) -> HealthResponse {
    HealthResponse {
        status: "healthy",
        timestamp: timestamp(),
        uptime: ctx.uptime().as_secs_f64(),
    }
}
