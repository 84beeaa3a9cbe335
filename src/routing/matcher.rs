//! Route matching logic.
//!
//! # Design Decisions
//! - Method and path must both match
//! - Path comparison is literal string equality (case-sensitive, no
//!   trailing-slash folding, no patterns)
//! - The query string is not part of the path

use axum::http::Method;

/// Matches a single method + path pair exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactMatcher {
    method: Method,
    path: &'static str,
}

impl ExactMatcher {
    pub fn new(method: Method, path: &'static str) -> Self {
        Self { method, path }
    }

    /// Returns true if the request method and path match this route.
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        self.method == *method && self.path == path
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}
