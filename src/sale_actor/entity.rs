use std::convert::Infallible;

use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Sale, SaleCreate};
use super::error::SaleError;

impl Entity for Sale {
    type Id = u64;
    type CreateParams = SaleCreate;
    // Ledger entries are append-only: there is no action to send.
    type Action = Infallible;
    type ActionResult = ();
    type Error = SaleError;

    fn id(&self) -> &u64 {
        &self.id
    }

    /// Stamps the sale with the current time.
    fn from_create_params(id: u64, params: SaleCreate) -> Result<Self, SaleError> {
        Ok(Self {
            id,
            product_id: params.product_id,
            product_name: params.product_name,
            quantity: params.quantity,
            total: params.total,
            timestamp: Utc::now(),
            seller: params.seller,
        })
    }

    fn on_create(&mut self) -> Result<(), SaleError> {
        if self.quantity == 0 {
            return Err(SaleError::InvalidQuantity(0));
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), SaleError> {
        match action {}
    }
}
