use crate::actor_framework::Entity;
use crate::domain::Product;
use super::actions::{ProductAction, ProductActionResult};
use super::dtos::ProductCreate;
use super::error::ProductError;

impl Entity for Product {
    type Id = u32;
    type CreateParams = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    fn id(&self) -> &u32 {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// Rejects a blank name.
    fn from_create_params(id: u32, params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.trim().is_empty() {
            return Err(ProductError::InvalidProduct("name must not be empty".to_string()));
        }
        Ok(Self::new(id, params.name, params.price, params.quantity, params.category))
    }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `ReserveStock(amount)`: Decrements stock by the specified amount
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::ReserveStock(0) => Err(ProductError::InvalidQuantity(0)),
            ProductAction::ReserveStock(amount) => {
                if amount > self.quantity {
                    return Err(ProductError::InsufficientStock {
                        requested: amount,
                        available: self.quantity,
                    });
                }
                if self.price.checked_mul(u64::from(amount)).is_none() {
                    return Err(ProductError::PriceOverflow { price: self.price, quantity: amount });
                }
                self.quantity -= amount;
                Ok(ProductActionResult::Reserved(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n95() -> Product {
        Product::new(1, "Mascarillas N95", 2500, 50, "Protección")
    }

    #[test]
    fn reserve_decrements_stock() {
        let mut product = n95();
        let ProductActionResult::Reserved(snapshot) =
            product.handle_action(ProductAction::ReserveStock(10)).unwrap();
        assert_eq!(snapshot.quantity, 40);
        assert_eq!(product.quantity, 40);
    }

    #[test]
    fn reserve_entire_stock_leaves_zero() {
        let mut product = n95();
        product.handle_action(ProductAction::ReserveStock(50)).unwrap();
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn reserve_more_than_available_leaves_stock_unchanged() {
        let mut product = n95();
        let err = product.handle_action(ProductAction::ReserveStock(51)).unwrap_err();
        assert_eq!(err, ProductError::InsufficientStock { requested: 51, available: 50 });
        assert_eq!(product.quantity, 50);
    }

    #[test]
    fn reserve_zero_is_rejected() {
        let mut product = n95();
        let err = product.handle_action(ProductAction::ReserveStock(0)).unwrap_err();
        assert_eq!(err, ProductError::InvalidQuantity(0));
        assert_eq!(product.quantity, 50);
    }

    #[test]
    fn reserve_rejects_overflowing_total() {
        let mut product = Product::new(9, "Lingote", u64::MAX, 5, "Varios");
        let err = product.handle_action(ProductAction::ReserveStock(2)).unwrap_err();
        assert_eq!(err, ProductError::PriceOverflow { price: u64::MAX, quantity: 2 });
        assert_eq!(product.quantity, 5);
    }

    #[test]
    fn blank_name_is_rejected() {
        let params = ProductCreate {
            name: "  ".to_string(),
            price: 100,
            quantity: 1,
            category: "Varios".to_string(),
        };
        assert!(matches!(Product::from_create_params(1, params), Err(ProductError::InvalidProduct(_))));
    }
}
