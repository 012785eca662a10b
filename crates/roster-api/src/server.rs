//! Server assembly: listener, router, graceful shutdown.

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::routes::router;
use crate::state::AppState;

/// Binds the configured address and serves a freshly seeded directory
/// until the process is interrupted.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = router(AppState::seeded());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "directory service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("directory service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
}
