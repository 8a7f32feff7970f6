use tracing::{error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::clients::{ProductClient, SaleClient};
use crate::domain::{Product, Sale};
use crate::product_actor::{ProductCreate, ProductError};

const CHANNEL_BUFFER: usize = 32;

/// The main application system that owns the catalog and ledger actors.
///
/// Responsible for starting up actors, seeding the catalog, wiring the clients
/// together, and handling shutdown.
pub struct InventorySystem {
    pub product_client: ProductClient,
    pub sale_client: SaleClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts both actors and loads `catalog` into the product actor in order.
    #[instrument(name = "inventory_system", skip(catalog), fields(products = catalog.len()))]
    pub async fn start(catalog: Vec<ProductCreate>) -> Result<Self, ProductError> {
        info!("Starting inventory system");

        // 1. Catalog
        let mut next_product_id = 0u32;
        let (product_actor, product_resource_client) = ResourceActor::<Product>::new(CHANNEL_BUFFER, move || {
            next_product_id += 1;
            next_product_id
        });
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Ledger
        let mut next_sale_id = 0u64;
        let (sale_actor, sale_resource_client) = ResourceActor::<Sale>::new(CHANNEL_BUFFER, move || {
            next_sale_id += 1;
            next_sale_id
        });
        let sale_client = SaleClient::new(sale_resource_client, product_client.clone());
        let sale_handle = tokio::spawn(sale_actor.run());

        // 3. Seed
        for params in catalog {
            let product = product_client.create_product(params).await?;
            info!(product_id = product.id, product_name = %product.name, stock = product.quantity, "Product loaded");
        }

        Ok(Self {
            product_client,
            sale_client,
            handles: vec![product_handle, sale_handle],
        })
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Actors stop once every client handle is gone.
        drop(self.sale_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
