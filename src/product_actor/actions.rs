use crate::domain::Product;

/// Custom actions for Product entities.
///
/// These actions represent domain-specific operations that can be performed
/// on a product beyond plain reads.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Validates and decrements stock for a sale in one step.
    ///
    /// # Errors
    /// Fails without touching stock when the amount is zero, exceeds the
    /// quantity on hand, or would overflow the sale total.
    ReserveStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Snapshot of the product taken right after the decrement
    Reserved(Product),
}
