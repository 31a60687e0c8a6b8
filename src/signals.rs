use tokio::sync::broadcast;
use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

/// Shutdown signal types
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    /// Graceful shutdown (drain connections, clean up)
    Graceful,
}

/// Setup signal handlers for the server
///
/// Returns a broadcast sender for shutdown signals, a receiver subscribed before
/// the signal task starts, and a join handle for the signal task.
/// SIGTERM and SIGINT both trigger a graceful shutdown.
#[cfg(unix)]
pub fn setup_signal_handlers() -> (
    broadcast::Sender<ShutdownSignal>,
    broadcast::Receiver<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, shutdown_rx) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        let (mut sigterm, mut sigint) = match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(term), Ok(int)) => (term, int),
            (Err(e), _) | (_, Err(e)) => {
                shutdown_on_install_failure(&tx_clone, &e);
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, initiating graceful shutdown");
            }
            _ = sigint.recv() => {
                info!("SIGINT received, initiating graceful shutdown");
            }
        }

        let _ = tx_clone.send(ShutdownSignal::Graceful);
    });

    (shutdown_tx, shutdown_rx, handle)
}

/// Without signal handlers the server could never be stopped, so it
/// shuts down right away instead of running unkillable.
fn shutdown_on_install_failure(tx: &broadcast::Sender<ShutdownSignal>, err: &std::io::Error) {
    error!("Failed to install signal handlers, shutting down: {}", err);
    let _ = tx.send(ShutdownSignal::Graceful);
}

/// Windows placeholder - only Ctrl+C is supported
#[cfg(not(unix))]
pub fn setup_signal_handlers() -> (
    broadcast::Sender<ShutdownSignal>,
    broadcast::Receiver<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, shutdown_rx) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, initiating shutdown");
                let _ = tx_clone.send(ShutdownSignal::Graceful);
            }
            Err(e) => shutdown_on_install_failure(&tx_clone, &e),
        }
    });

    (shutdown_tx, shutdown_rx, handle)
}
