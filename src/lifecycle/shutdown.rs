//! Shutdown coordination for the router.

use tokio::sync::broadcast;

/// Broadcast-backed shutdown signal.
///
/// Long-running tasks subscribe once at startup; a single `trigger`
/// wakes every subscriber. Receivers created after the trigger miss
/// the signal, so subscribe before spawning.
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

    /// Signal every subscriber to wind down.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
