//! JSON API consumed by the BioManager frontend.

use std::future::Future;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::clients::{ProductClient, SaleClient};

mod auth;
pub mod error;
mod inventory;
mod sales;

pub use error::ApiError;

pub const ROOT_MESSAGE: &str =
    "BioManager Back-End API está funcionando. Conéctate desde el Front-End para usar la aplicación.";

#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub sales: SaleClient,
    pub low_stock_threshold: u32,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/login", post(auth::login))
        .route("/api/inventario", get(inventory::list_inventory))
        .route("/api/inventario/{id}", get(inventory::get_product))
        .route("/api/ventas", get(sales::list_sales).post(sales::register_sale))
        .route("/api/estadisticas", get(inventory::stats))
        // The frontend is served from another origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    ROOT_MESSAGE
}

/// Serves the API until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    info!(bind_address = %listener.local_addr()?, "HTTP API listening");
    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown).await
}
