use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{InventoryStats, Product};
use super::error::ApiError;
use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct InventoryQuery {
    /// Case-insensitive substring of the product name.
    pub q: Option<String>,
}

#[instrument(skip(state))]
pub async fn list_inventory(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = match query.q.as_deref() {
        Some(needle) => state.products.search_products(needle).await?,
        None => state.products.list_products().await?,
    };
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Product>, ApiError> {
    state.products.get_product(id).await?.map(Json).ok_or(ApiError::ProductNotFound)
}

#[instrument(skip(state))]
pub async fn stats(State(state): State<AppState>) -> Result<Json<InventoryStats>, ApiError> {
    let (products, sales) = tokio::try_join!(
        async { state.products.list_products().await.map_err(ApiError::from) },
        async { state.sales.list_sales().await.map_err(ApiError::from) },
    )?;
    Ok(Json(InventoryStats::compute(&products, &sales, state.low_stock_threshold)))
}
