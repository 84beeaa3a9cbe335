//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP middleware produces:
//!     → logging.rs (one structured event per request)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;
