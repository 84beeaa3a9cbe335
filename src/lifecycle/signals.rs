//! OS signal handling.
//!
//! # Responsibilities
//! - Register the SIGTERM handler at startup, before the listener binds
//! - Resolve once the signal arrives
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Only the termination signal is handled; SIGINT keeps its default
//!   behavior on unix
//! - Hosts without unix signals fall back to Ctrl-C

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// An installed termination-signal listener.
pub struct TerminationSignal {
    #[cfg(unix)]
    inner: Signal,
}

impl TerminationSignal {
    /// Register the handler. Failure here is fatal at startup.
    pub fn install() -> Result<Self, std::io::Error> {
        #[cfg(unix)]
        {
            Ok(Self {
                inner: signal(SignalKind::terminate())?,
            })
        }

        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    /// Wait for the signal.
    #[cfg_attr(not(unix), allow(unused_mut))]
    pub async fn recv(mut self) {
        #[cfg(unix)]
        {
            self.inner.recv().await;
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        }

        tracing::info!("SIGTERM received. Shutting down gracefully");
    }
}
