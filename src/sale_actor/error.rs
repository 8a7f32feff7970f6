use crate::actor_framework::FrameworkError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur while registering or reading sales.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaleError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Sale validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<SaleError>> for SaleError {
    fn from(err: FrameworkError<SaleError>) -> Self {
        match err {
            FrameworkError::Entity(inner) => inner,
            other => SaleError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<ProductError> for SaleError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => SaleError::ProductNotFound(id),
            ProductError::InsufficientStock { requested, available } => {
                SaleError::InsufficientStock { requested, available }
            }
            ProductError::InvalidQuantity(quantity) => SaleError::InvalidQuantity(quantity),
            ProductError::ActorCommunicationError(msg) => SaleError::ActorCommunicationError(msg),
            other => SaleError::ValidationError(other.to_string()),
        }
    }
}
