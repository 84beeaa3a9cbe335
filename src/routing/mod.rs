//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (route lookup)
//!     → matcher.rs (exact method + path comparison)
//!     → Return: matched Route or None (→ 404)
//! ```
//!
//! # Design Decisions
//! - Routes are fixed at compile time, immutable at runtime
//! - Literal string equality, no patterns
//! - Deterministic: same input always matches same route
//! - Preflight (OPTIONS) never reaches the table while CORS is enabled

pub mod matcher;
pub mod router;

pub use matcher::ExactMatcher;
pub use router::{Endpoint, Route, RouteTable};
