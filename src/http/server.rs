//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the dispatch fallback
//! - Wire up middleware (request id, tracing, CORS, logging, panic
//!   boundary, JSON body guard)
//! - Serve on a bound listener until the shutdown future resolves

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::context::ServiceContext;
use crate::http::handlers::dispatch;
use crate::http::middleware::cors;
use crate::http::request::{guard_json_body, log_request, request_boundary};
use crate::http::response::ApiError;
use crate::lifecycle::faults::payload_message;
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<ServiceContext>,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            routes: Arc::new(RouteTable::new()),
        }
    }
}

/// HTTP server for the status service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around the given context.
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let state = AppState::new(ctx);
        let router = build_router(Router::new().fallback(dispatch), state);
        Self { router }
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve connections from `listener` until `shutdown` resolves, then
    /// stop accepting and wait for in-flight requests to finish.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Apply the middleware stack to `routes`.
///
/// Layers listed innermost first: JSON body guard, request fault boundary,
/// panic catcher, preflight short-circuit, request log, CORS headers,
/// tracing span, request id. A panic in any layer outside the boundary is
/// an escaped fault and ends the process once the panic hook is installed.
pub(crate) fn build_router(routes: Router<AppState>, state: AppState) -> Router {
    let cors_enabled = state.ctx.config.cors_enabled;

    let mut router = routes
        .layer(middleware::from_fn_with_state(state.clone(), guard_json_body))
        .layer(middleware::from_fn(request_boundary))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state);

    if cors_enabled {
        router = cors::with_preflight(router);
    }
    router = router.layer(middleware::from_fn(log_request));
    if cors_enabled {
        router = cors::with_headers(router);
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// A panic inside the request boundary becomes a generic 500. The panic
/// hook has already logged it with its location.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::debug!(panic = %payload_message(&*err), "Responding 500 after handler panic");
    ApiError::Internal.into_response()
}
