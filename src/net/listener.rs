//! TCP listener binding.
//!
//! # Responsibilities
//! - Bind to the configured host and port
//! - Classify bind failures so "address in use" is reported plainly
//!
//! # Design Decisions
//! - No accept-side backpressure; axum accepts as fast as connections arrive
//! - Hostnames are resolved by the OS; the first address that binds wins

use std::io::ErrorKind;

use tokio::net::TcpListener;

use crate::config::ServerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Another socket already holds the address.
    #[error("port {port} is already in use ({address})")]
    AddrInUse { address: String, port: u16 },

    /// Any other bind failure.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind a listener for the configured host and port.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ListenerError> {
    let address = config.bind_address();

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| classify(&address, config.port, e))?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| classify(&address, config.port, e))?;

    tracing::info!(address = %local_addr, "Listener bound");
    Ok(listener)
}

fn classify(address: &str, port: u16, source: std::io::Error) -> ListenerError {
    if source.kind() == ErrorKind::AddrInUse {
        ListenerError::AddrInUse {
            address: address.to_string(),
            port,
        }
    } else {
        ListenerError::Bind {
            address: address.to_string(),
            source,
        }
    }
}
