//! Configuration schema definitions.
//!
//! Every field maps to an upper-cased environment variable of the same name
//! (`port` ← `PORT`, `cors_enabled` ← `CORS_ENABLED`). All fields have
//! defaults so an empty environment yields a runnable server.

use std::net::SocketAddr;

use serde::Deserialize;

/// Root configuration for the status server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bind address (IP literal or hostname).
    #[serde(default = "default_host")]
    pub host: String,

    /// Deployment environment name. Reported only, never alters behavior.
    #[serde(default = "default_app_env")]
    pub app_env: String,

    /// Attach CORS headers and short-circuit preflight requests.
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Upper bound when buffering a JSON request body.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Prometheus exporter bind address; exporter disabled when unset.
    #[serde(default)]
    pub metrics_address: Option<String>,

    /// Prefixes of platform variables logged at startup.
    #[serde(default = "default_deployment_var_prefixes")]
    pub deployment_var_prefixes: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            app_env: default_app_env(),
            cors_enabled: true,
            max_body_bytes: default_max_body_bytes(),
            log_format: LogFormat::default(),
            metrics_address: None,
            deployment_var_prefixes: default_deployment_var_prefixes(),
        }
    }
}

impl ServerConfig {
    /// `host:port` form used in log lines.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Parsed exporter address. Unparseable values are rejected during
    /// validation, so `None` here means the exporter is disabled.
    pub fn metrics_socket_addr(&self) -> Option<SocketAddr> {
        self.metrics_address.as_deref().and_then(|a| a.parse().ok())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    100 * 1024
}

fn default_deployment_var_prefixes() -> Vec<String> {
    vec!["RAILWAY_".to_string()]
}
