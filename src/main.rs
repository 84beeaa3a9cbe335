//! Status server entry point.
//!
//! # Architecture Overview
//!
//! ```text
//!   env / .env ──▶ config ──▶ ServiceContext (immutable, Arc)
//!                                   │
//!   Client ──▶ net::bind ──▶ http::server ──▶ middleware ──▶ routing ──▶ handlers
//!                                   ▲
//!   SIGTERM ──▶ lifecycle::signals ─┴─▶ Shutdown ──▶ drain ──▶ exit 0
//! ```

use std::process::ExitCode;

use status_server::config;
use status_server::lifecycle::{faults, startup, ServiceError};
use status_server::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let config = config::load_config();
    logging::init(config.as_ref().map(|c| c.log_format).unwrap_or_default());
    faults::install_panic_hook();

    tracing::info!("status-server v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match config {
        Ok(config) => startup::start(config).await,
        Err(e) => Err(ServiceError::from(e)),
    };

    match result {
        Ok(()) => {
            tracing::info!("Process terminated");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal error, exiting");
            ExitCode::from(e.exit_code())
        }
    }
}
