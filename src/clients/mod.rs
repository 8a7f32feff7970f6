//! Typed handles wrapping the generic resource clients.

#[macro_use]
mod macros;

mod product_client;
mod sale_client;

pub use product_client::ProductClient;
pub use sale_client::SaleClient;
