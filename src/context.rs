//! Immutable per-process service context.
//!
//! Everything a handler may report about the process (configuration, start
//! time, version, platform, deployment variables) is captured here once at
//! startup and shared behind an `Arc`. Handlers never read the environment.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::config::{deployment_vars, ServerConfig};

/// Memory usage of the current process, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    pub rss_bytes: u64,
    pub virtual_bytes: u64,
}

/// Samples memory usage of the current process.
struct ProcessSampler {
    pid: Option<Pid>,
    system: Mutex<System>,
}

impl ProcessSampler {
    fn new() -> Self {
        Self {
            pid: sysinfo::get_current_pid().ok(),
            system: Mutex::new(System::new()),
        }
    }

    fn sample(&self) -> Option<MemoryUsage> {
        let pid = self.pid?;
        let mut system = self.system.lock().ok()?;
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        let process = system.process(pid)?;
        Some(MemoryUsage {
            rss_bytes: process.memory(),
            virtual_bytes: process.virtual_memory(),
        })
    }
}

/// Process-lifetime context handed to the HTTP layer.
pub struct ServiceContext {
    pub config: ServerConfig,
    pub started_at: Instant,
    pub started_at_utc: DateTime<Utc>,
    pub version: &'static str,
    pub platform: &'static str,
    /// Diagnostic snapshot of deployment variables taken at startup.
    pub deployment_vars: Vec<(String, String)>,
    sampler: ProcessSampler,
}

impl ServiceContext {
    /// Build a context with an explicit deployment variable snapshot.
    pub fn new(config: ServerConfig, deployment_vars: Vec<(String, String)>) -> Self {
        Self {
            config,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            platform: std::env::consts::OS,
            deployment_vars,
            sampler: ProcessSampler::new(),
        }
    }

    /// Build a context, snapshotting deployment variables from the process
    /// environment using the configured prefixes.
    pub fn from_env(config: ServerConfig) -> Self {
        let vars = deployment_vars(std::env::vars(), &config.deployment_var_prefixes);
        Self::new(config, vars)
    }

    /// Time since the context was created.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Current memory usage, if the platform reports it.
    pub fn memory(&self) -> Option<MemoryUsage> {
        self.sampler.sample()
    }
}
