//! Startup orchestration.
//!
//! # Responsibilities
//! - Install the signal handler and metrics exporter
//! - Capture the service context and log diagnostics
//! - Bind the listener and run the server under supervision
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The signal handler is registered before the socket is bound
//! - The server and the signal listener run on their own tasks; both are
//!   supervised, so neither can end silently

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::{ConfigError, ServerConfig};
use crate::context::ServiceContext;
use crate::http::HttpServer;
use crate::lifecycle::faults;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::TerminationSignal;
use crate::net::{self, ListenerError};
use crate::observability::metrics;

/// Fatal errors; each maps to a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("failed to install signal handler: {0}")]
    Signal(#[source] std::io::Error),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("unrecovered fault: {0}")]
    Fault(String),
}

impl ServiceError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        faults::FAULT_EXIT_CODE
    }
}

/// Start the service from a validated configuration and block until it has
/// shut down.
pub async fn start(config: ServerConfig) -> Result<(), ServiceError> {
    let signal = TerminationSignal::install().map_err(ServiceError::Signal)?;

    if let Some(addr) = config.metrics_socket_addr() {
        metrics::init_metrics(addr)?;
    }

    let ctx = Arc::new(ServiceContext::from_env(config));
    log_startup(&ctx);

    let shutdown = Shutdown::new();
    let notified = shutdown.notified();
    let mut signal_task = tokio::spawn(async move {
        signal.recv().await;
        shutdown.trigger();
    });

    let server = run(ctx, notified);
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            signal_task.abort();
            result
        }
        joined = &mut signal_task => match joined {
            // Shutdown was triggered; let the server drain.
            Ok(()) => server.await,
            Err(e) => Err(faults::join_fault(e)),
        },
    }
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn run<F>(ctx: Arc<ServiceContext>, shutdown: F) -> Result<(), ServiceError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = net::bind(&ctx.config).await?;
    tracing::info!(
        address = %ctx.config.bind_address(),
        "Server running at http://{}",
        ctx.config.bind_address()
    );
    serve(ctx, listener, shutdown).await
}

/// Serve on an already-bound listener under fault supervision.
pub async fn serve<F>(
    ctx: Arc<ServiceContext>,
    listener: TcpListener,
    shutdown: F,
) -> Result<(), ServiceError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let server = HttpServer::new(ctx);
    let handle = tokio::spawn(server.run(listener, shutdown));
    faults::supervise(handle).await
}

/// Log configuration and deployment diagnostics.
pub fn log_startup(ctx: &ServiceContext) {
    tracing::info!(
        version = ctx.version,
        platform = ctx.platform,
        environment = %ctx.config.app_env,
        bind_address = %ctx.config.bind_address(),
        cors_enabled = ctx.config.cors_enabled,
        started_at = %ctx.started_at_utc.to_rfc3339(),
        "Configuration loaded"
    );

    for (key, value) in &ctx.deployment_vars {
        tracing::info!(key = %key, value = %value, "Environment variable");
    }
}
