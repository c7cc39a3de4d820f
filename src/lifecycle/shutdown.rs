//! Shutdown coordination.

use tokio::sync::broadcast;

/// Broadcast-based shutdown coordinator.
///
/// The server (and any future long-running task) subscribes; triggering the
/// coordinator wakes every subscriber once. Cloning yields another handle to
/// the same channel.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal. Safe to call more than once.
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

    #[tokio::test]
    async fn trigger_wakes_subscriber() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        shutdown.trigger();
        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn trigger_without_subscribers_is_fine() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        shutdown.trigger();
    }
}
