//! Minimal HTTP status service.
//!
//! Serves `GET /` and `GET /health` as static JSON, answers CORS preflight,
//! logs every request, and shuts down gracefully on SIGTERM.

pub mod config;
pub mod context;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use context::ServiceContext;
pub use http::HttpServer;
pub use lifecycle::{ServiceError, Shutdown};
