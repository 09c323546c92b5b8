use super::router;
use crate::chat::ChatEngine;
use crate::store::VectorStore;
use anyhow::Result as AnyhowResult;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

pub async fn start_http_server<S: VectorStore>(
    addr: SocketAddr,
    engine: Arc<ChatEngine<S>>,
) -> AnyhowResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    info!("Press Ctrl+C to shutdown");

    axum::serve(listener, router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server has been shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
