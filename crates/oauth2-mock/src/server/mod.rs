//! HTTP server lifecycle.
//!
//! Binds the configured port (0 picks an ephemeral one), serves the router,
//! and shuts down gracefully on ctrl-c. Requests are handled independently;
//! the only shared state is the read-only [`Config`].

pub mod handlers;
pub mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Config;

pub use handlers::create_router;

/// Bind and serve until shutdown.
///
/// # Errors
///
/// Returns error if the port cannot be bound or the server fails.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = handlers::create_router(Arc::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Listening on http://{local_addr}");

    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}
