//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig (host, port)
//!     → listener.rs (bind, classify errors)
//!     → Hand off TcpListener to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Bind happens before any request can be served; failure is fatal
//! - Connection handling itself belongs to axum

pub mod listener;

pub use listener::{bind, ListenerError};
