use chrono::{DateTime, Utc};
use serde::Serialize;

/// A completed sale. Ledger entries are never mutated or removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sale {
    pub id: u64,
    #[serde(rename = "productoId")]
    pub product_id: u32,
    #[serde(rename = "producto")]
    pub product_name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    pub total: u64,
    #[serde(rename = "fecha")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "vendedor", skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
}

/// Payload for appending a sale to the ledger.
#[derive(Debug, Clone)]
pub struct SaleCreate {
    pub product_id: u32,
    pub product_name: String,
    pub quantity: u32,
    pub total: u64,
    pub seller: Option<String>,
}
