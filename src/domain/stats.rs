use serde::Serialize;

use super::{Product, Sale};

/// Dashboard figures derived from the current catalog and ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub productos_total: usize,
    pub ventas_total: usize,
    pub ingresos_total: u64,
    /// Products whose stock is strictly below the low-stock threshold.
    pub stock_bajo: usize,
}

impl InventoryStats {
    pub fn compute(products: &[Product], sales: &[Sale], low_stock_threshold: u32) -> Self {
        Self {
            productos_total: products.len(),
            ventas_total: sales.len(),
            ingresos_total: sales.iter().map(|sale| sale.total).sum(),
            stock_bajo: products.iter().filter(|p| p.quantity < low_stock_threshold).count(),
        }
    }
}
