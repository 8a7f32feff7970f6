use tracing::{debug, instrument};
use crate::domain::Product;
use crate::product_actor::{ProductAction, ProductActionResult, ProductCreate, ProductError};
use crate::actor_framework::ResourceClient;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, u32, ProductError, product);

impl ProductClient {
    #[instrument(skip(self), fields(product_name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// Catalog snapshot ordered by id, filtered by a case-insensitive name substring.
    #[instrument(skip(self))]
    pub async fn search_products(&self, needle: &str) -> Result<Vec<Product>, ProductError> {
        let mut products = self.list_products().await?;
        products.retain(|product| product.name_matches(needle));
        Ok(products)
    }

    /// Atomically checks and decrements stock, returning the product as it is afterwards.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: u32, quantity: u32) -> Result<Product, ProductError> {
        debug!("Sending request");
        let ProductActionResult::Reserved(product) =
            self.inner.perform_action(id, ProductAction::ReserveStock(quantity)).await?;
        Ok(product)
    }
}
