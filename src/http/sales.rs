use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domain::Sale;
use super::error::ApiError;
use super::AppState;

/// Product id as sent by clients: the cart UI posts the `<select>` value as a string,
/// and other callers may send a float.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProductRef {
    Id(u32),
    Number(f64),
    Text(String),
}

impl ProductRef {
    /// Reads the leading whole number the way a lenient integer parse would.
    /// `None` when the reference cannot name any product.
    pub fn resolve(&self) -> Option<u32> {
        match self {
            ProductRef::Id(id) => Some(*id),
            ProductRef::Number(value) if value.is_finite() && *value >= 0.0 => {
                let whole = value.trunc();
                (whole <= f64::from(u32::MAX)).then(|| whole as u32)
            }
            ProductRef::Number(_) => None,
            ProductRef::Text(text) => {
                let digits: String = text.trim_start().chars().take_while(char::is_ascii_digit).collect();
                digits.parse().ok()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaleRequest {
    #[serde(rename = "productoId")]
    pub product_id: ProductRef,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "vendedor", default)]
    pub seller: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaleResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(rename = "venta")]
    pub sale: Sale,
}

#[instrument(skip(state, body))]
pub async fn register_sale(
    State(state): State<AppState>,
    body: Result<Json<SaleRequest>, JsonRejection>,
) -> Result<Json<SaleResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let product_id = request.product_id.resolve().ok_or(ApiError::ProductNotFound)?;
    let seller = request.seller.filter(|name| !name.trim().is_empty());

    let sale = state.sales.register_sale(product_id, request.quantity, seller).await?;
    info!(sale_id = sale.id, product_id, "Sale recorded");
    Ok(Json(SaleResponse { success: true, message: "Venta exitosa", sale }))
}

#[instrument(skip(state))]
pub async fn list_sales(State(state): State<AppState>) -> Result<Json<Vec<Sale>>, ApiError> {
    Ok(Json(state.sales.list_sales().await?))
}
