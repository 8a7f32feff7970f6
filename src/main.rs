use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};

use biomanager::app_system::{default_catalog, setup_tracing, InventorySystem};
use biomanager::config::{AppConfig, LoadOptions};
use biomanager::http::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Config first so logging honours it
    let config = AppConfig::load(LoadOptions::default())?;
    setup_tracing(&config.logging);

    info!("Starting BioManager back-end");

    // Create the catalog and ledger actors
    let system = InventorySystem::start(default_catalog()).await?;

    let state = AppState {
        products: system.product_client.clone(),
        sales: system.sale_client.clone(),
        low_stock_threshold: config.inventory.low_stock_threshold,
    };

    let address = config.listen_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("could not bind {address}"))?;

    http::serve(listener, state, shutdown_signal()).await?;

    // Shutdown system gracefully
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("BioManager back-end stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
