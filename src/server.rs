//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, state construction, and the Axum server
//! lifecycle.

use crate::config::Config;
use crate::infrastructure::store::RedisStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis store connection (PING-validated)
/// - Shared application state
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the store connection, server bind, or server runtime
/// fails. A store connection failure here is fatal on purpose: the process
/// refuses to start without its system of record.
pub async fn run(config: Config) -> Result<()> {
    let store = RedisStore::connect(&config.redis_url)
        .await
        .context("Failed to connect to the key-value store")?;

    let state = AppState::new(Arc::new(store), config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {e}"),
    }
}
