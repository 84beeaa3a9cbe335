//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the static route table
//! - Look up the matching route for a method + path
//! - Return the matched route or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan; the table has two entries
//! - Explicit `None` rather than a silent default route

use axum::http::Method;

use crate::routing::matcher::ExactMatcher;

/// Response-producing behavior a route maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Service status with process metadata.
    Root,
    /// Liveness check.
    Health,
}

/// A named (method, path) pair mapped to an endpoint.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: &'static str,
    pub matcher: ExactMatcher,
    pub endpoint: Endpoint,
}

/// The fixed routing table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build the service's route table.
    pub fn new() -> Self {
        Self {
            routes: vec![
                Route {
                    name: "root",
                    matcher: ExactMatcher::new(Method::GET, "/"),
                    endpoint: Endpoint::Root,
                },
                Route {
                    name: "health",
                    matcher: ExactMatcher::new(Method::GET, "/health"),
                    endpoint: Endpoint::Health,
                },
            ],
        }
    }

    /// Find the route for `method` + `path`, first match wins.
    pub fn match_route(&self, method: &Method, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(method, path))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_root_and_health() {
        let table = RouteTable::new();

        let root = table.match_route(&Method::GET, "/").unwrap();
        assert_eq!(root.endpoint, Endpoint::Root);

        let health = table.match_route(&Method::GET, "/health").unwrap();
        assert_eq!(health.endpoint, Endpoint::Health);
        assert_eq!(health.name, "health");
    }

    #[test]
    fn unknown_method_or_path_is_no_match() {
        let table = RouteTable::new();
        assert!(table.match_route(&Method::POST, "/").is_none());
        assert!(table.match_route(&Method::DELETE, "/health").is_none());
        assert!(table.match_route(&Method::GET, "/status").is_none());
        assert!(table.match_route(&Method::OPTIONS, "/").is_none());
    }

    #[test]
    fn table_is_fixed() {
        let paths: Vec<&str> = RouteTable::new()
            .routes()
            .iter()
            .map(|r| r.matcher.path())
            .collect();
        assert_eq!(paths, vec!["/", "/health"]);
    }
}
