//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Signal handler → Context → Bind → Serve (supervised)
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight → Exit 0
//!
//! Signals (signals.rs):
//!     SIGTERM → Trigger graceful shutdown
//!
//! Faults (faults.rs):
//!     Panic in a request → 500, logged
//!     Panic escaping the server task → logged, exit non-zero
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, listener last
//! - No drain deadline: in-flight responses are static and short

pub mod faults;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{run, serve, start, ServiceError};
