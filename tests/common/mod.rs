//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use status_server::lifecycle::{serve, ServiceError, Shutdown};
use status_server::{ServerConfig, ServiceContext};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running in-process on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub task: JoinHandle<Result<(), ServiceError>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) -> Result<(), ServiceError> {
        self.shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(5), self.task)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked")
    }
}

/// Start a server with `config`, overriding host and port.
pub async fn start_server(mut config: ServerConfig) -> TestServer {
    config.host = "127.0.0.1".into();
    config.port = 0;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let ctx = Arc::new(ServiceContext::new(config, Vec::new()));

    let shutdown = Shutdown::new();
    let task = tokio::spawn(serve(ctx, listener, shutdown.notified()));

    TestServer {
        addr,
        shutdown,
        task,
    }
}

/// A client that never reuses connections between requests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
