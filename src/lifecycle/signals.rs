//! OS signal handling.

use crate::lifecycle::Shutdown;

/// Spawn a task that triggers graceful shutdown on Ctrl+C.
pub fn spawn_signal_listener(shutdown: Shutdown) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                shutdown.trigger();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            }
        }
    });
}
