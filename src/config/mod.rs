//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (envy deserialize, NODE_ENV fallback)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → captured into ServiceContext at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once; nothing reads the environment after startup
//! - All fields have defaults to allow an empty environment
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{deployment_vars, from_vars, load_config, ConfigError};
pub use schema::{LogFormat, ServerConfig};
