//! Shutdown coordination for the service.

use std::future::Future;

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that long-running tasks can subscribe to.
/// Dropping the coordinator also releases every waiter.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Future that resolves once shutdown is triggered. The subscription is
    /// taken when this is called, not when the future is first polled.
    pub fn notified(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.subscribe();
        async move {
            let _ = rx.recv().await;
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn notified_resolves_after_trigger() {
        let shutdown = Shutdown::new();
        let waiter = tokio::spawn(shutdown.notified());

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should resolve")
            .unwrap();
    }

    #[tokio::test]
    async fn notified_resolves_when_coordinator_dropped() {
        let shutdown = Shutdown::new();
        let waiter = shutdown.notified();
        drop(shutdown);

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should resolve");
    }

    #[tokio::test]
    async fn untriggered_waiter_stays_pending() {
        let shutdown = Shutdown::new();
        let waiter = shutdown.notified();

        let result = tokio::time::timeout(Duration::from_millis(50), waiter).await;
        assert!(result.is_err());
    }
}
