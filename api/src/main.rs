//! Auto Bazaar API Server
//!
//! Read-only HTTP API over the dealer and warehouse car inventories.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod docs;
mod domain;
mod error;
mod handlers;
mod routes;

#[cfg(test)]
mod test_utils;


use adapters::StaticInventoryRepository;
use app::InventoryService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub inventory_service: Arc<InventoryService<StaticInventoryRepository>>,
    pub config: Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,autobazaar_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Auto Bazaar API...");

    // Load configuration
    let config = Config::from_env();

    // Load inventories; malformed data stops startup here
    let inventory_repo = Arc::new(
        StaticInventoryRepository::load(&config)
            .await
            .context("Failed to load inventory data")?,
    );

    let catalog = inventory_repo.catalog();
    tracing::info!(
        "Inventory ready: {} dealer cars, {} warehouse cars",
        catalog.dealer().len(),
        catalog.warehouse().len()
    );

    let inventory_service = Arc::new(InventoryService::new(inventory_repo));

    // A CORS setting with no usable origin stops startup
    let cors = routes::cors_layer(&config).context("Invalid CORS configuration")?;

    // Create app state
    let state = AppState {
        inventory_service,
        config: config.clone(),
    };

    if config.allows_any_origin() {
        tracing::info!("CORS: all origins allowed");
    } else {
        tracing::info!("CORS: allowed origins {:?}", config.allowed_origins());
    }

    let app = routes::build_router(state, cors);

    // Start server
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
