use tokio::signal::unix::{signal, SignalKind};
use tracing::{info, warn};

/// Resolves once SIGTERM or SIGINT is received.
pub async fn wait_for_signal() {
    let (mut sigterm, mut sigint) = match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
        (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
        (Err(e), _) | (_, Err(e)) => {
            warn!("Unable to install signal handlers, graceful shutdown is disabled: {e}");
            return std::future::pending().await;
        }
    };
    let signal = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT"
    };
    info!("Received signal ({signal}) - shutting down gracefully.");
}
