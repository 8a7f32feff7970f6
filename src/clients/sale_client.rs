use tracing::{info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::clients::ProductClient;
use crate::domain::{Sale, SaleCreate};
use crate::sale_actor::SaleError;

/// Client for the sales ledger.
///
/// Registering a sale is orchestrated here: the stock check and decrement run
/// as one message on the product actor, then the sale is appended to the ledger.
#[derive(Clone)]
pub struct SaleClient {
    inner: ResourceClient<Sale>,
    product_client: ProductClient,
}

impl SaleClient {
    pub fn new(inner: ResourceClient<Sale>, product_client: ProductClient) -> Self {
        Self { inner, product_client }
    }

    #[instrument(skip(self))]
    pub async fn register_sale(
        &self,
        product_id: u32,
        quantity: u32,
        seller: Option<String>,
    ) -> Result<Sale, SaleError> {
        info!("Processing register_sale request");

        if quantity == 0 {
            warn!("Rejected sale with zero quantity");
            return Err(SaleError::InvalidQuantity(quantity));
        }

        // Step 1: Validate and reserve stock
        let product = match self.product_client.reserve_stock(product_id, quantity).await {
            Ok(product) => product,
            Err(e) => {
                warn!(error = %e, "Stock reservation failed");
                return Err(e.into());
            }
        };
        info!(product_name = %product.name, remaining = product.quantity, "Stock reserved");

        // Step 2: Append to the ledger. The product actor already verified this cannot overflow.
        let total = product.price.checked_mul(u64::from(quantity)).ok_or_else(|| {
            SaleError::ValidationError(format!("total overflows for {} x {}", product.price, quantity))
        })?;
        let params = SaleCreate {
            product_id: product.id,
            product_name: product.name,
            quantity,
            total,
            seller,
        };
        let sale = self.inner.create(params).await?;

        info!(sale_id = sale.id, total = sale.total, "Sale registered");
        Ok(sale)
    }
}

impl_client_methods!(SaleClient, Sale, u64, SaleError, sale);
