#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::actor_framework::{Entity, FrameworkError};
    use crate::app_system::{default_catalog, InventorySystem};
    use crate::clients::{ProductClient, SaleClient};
    use crate::domain::{Product, Sale};
    use crate::mock_framework::{create_mock_client, expect_action, expect_create, expect_list};
    use crate::product_actor::{ProductAction, ProductActionResult, ProductCreate, ProductError};
    use crate::sale_actor::SaleError;

    async fn seeded_system() -> InventorySystem {
        InventorySystem::start(default_catalog()).await.expect("system starts")
    }

    async fn stock_of(system: &InventorySystem, id: u32) -> u32 {
        system.product_client.get_product(id).await.unwrap().expect("product exists").quantity
    }

    #[tokio::test]
    async fn test_sale_registration_flow() {
        // 1. Setup Mocks
        let (product_client_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (sale_client_inner, mut sale_rx) = create_mock_client::<Sale>(10);

        let product_client = ProductClient::new(product_client_inner);
        let sale_client = SaleClient::new(sale_client_inner, product_client);

        // 2. Execute sale registration in background
        let sale_task = tokio::spawn(async move {
            sale_client.register_sale(1, 5, Some("Vendedor Juan".to_string())).await
        });

        // 3. Verify Interactions

        // Expect Stock Reservation (Action)
        let (product_id, action, responder) = expect_action(&mut product_rx).await.expect("Expected Product Action");
        assert_eq!(product_id, 1);
        let ProductAction::ReserveStock(qty) = action;
        assert_eq!(qty, 5);
        let remaining = Product::new(1, "Mascarillas N95", 2500, 45, "Protección");
        responder.send(Ok(ProductActionResult::Reserved(remaining))).unwrap();

        // Expect Sale Create
        let (params, responder) = expect_create(&mut sale_rx).await.expect("Expected Sale Create");
        assert_eq!(params.product_id, 1);
        assert_eq!(params.product_name, "Mascarillas N95");
        assert_eq!(params.quantity, 5);
        assert_eq!(params.total, 12500);
        assert_eq!(params.seller.as_deref(), Some("Vendedor Juan"));
        let sale = Sale::from_create_params(1, params).unwrap();
        responder.send(Ok(sale.clone())).unwrap();

        // 4. Verify Result
        let result = sale_task.await.unwrap();
        assert_eq!(result, Ok(sale));
    }

    #[tokio::test]
    async fn test_rejected_reservation_never_reaches_ledger() {
        let (product_client_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (sale_client_inner, mut sale_rx) = create_mock_client::<Sale>(10);
        let sale_client = SaleClient::new(sale_client_inner, ProductClient::new(product_client_inner));

        let sale_task = tokio::spawn(async move { sale_client.register_sale(1, 60, None).await });

        let (_, _, responder) = expect_action(&mut product_rx).await.expect("Expected Product Action");
        let rejection = ProductError::InsufficientStock { requested: 60, available: 50 };
        responder.send(Err(FrameworkError::Entity(rejection))).unwrap();

        let result = sale_task.await.unwrap();
        assert_eq!(result, Err(SaleError::InsufficientStock { requested: 60, available: 50 }));

        // The task finished and dropped its client, so the ledger saw nothing.
        assert!(sale_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_zero_quantity_is_rejected_before_any_request() {
        let (product_client_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (sale_client_inner, _sale_rx) = create_mock_client::<Sale>(10);
        let sale_client = SaleClient::new(sale_client_inner, ProductClient::new(product_client_inner));

        assert_eq!(sale_client.register_sale(1, 0, None).await, Err(SaleError::InvalidQuantity(0)));
        drop(sale_client);
        assert!(product_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_search_filters_catalog_snapshot() {
        let (product_client_inner, mut product_rx) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(product_client_inner);

        let search_task = tokio::spawn(async move { product_client.search_products("aceite").await });

        let responder = expect_list(&mut product_rx).await.expect("Expected Product List");
        responder
            .send(Ok(vec![
                Product::new(1, "Arroz Integral Orgánico", 4500, 50, "Granos"),
                Product::new(2, "Aceite de Coco Virgen", 22000, 15, "Aceites"),
            ]))
            .unwrap();

        let found = search_task.await.unwrap().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[tokio::test]
    async fn test_worked_example_from_seed() {
        let system = seeded_system().await;

        let sale = system.sale_client.register_sale(1, 10, None).await.unwrap();
        assert_eq!(sale.total, 2500 * 10);
        assert_eq!(stock_of(&system, 1).await, 40);

        let err = system.sale_client.register_sale(1, 45, None).await.unwrap_err();
        assert_eq!(err, SaleError::InsufficientStock { requested: 45, available: 40 });
        assert_eq!(stock_of(&system, 1).await, 40);
        assert_eq!(system.sale_client.list_sales().await.unwrap().len(), 1);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let system = seeded_system().await;

        let err = system.sale_client.register_sale(99, 1, None).await.unwrap_err();
        assert_eq!(err, SaleError::ProductNotFound("99".to_string()));
        assert!(system.sale_client.list_sales().await.unwrap().is_empty());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_sequence_of_sales_accounts_for_every_unit() {
        let system = seeded_system().await;
        let quantities = [1u32, 7, 20, 3, 60, 9, 15];

        let mut sold = 0u32;
        let mut accepted = Vec::new();
        for quantity in quantities {
            match system.sale_client.register_sale(2, quantity, None).await {
                Ok(sale) => {
                    assert_eq!(sale.total, 1500 * u64::from(quantity));
                    sold += quantity;
                    accepted.push(sale);
                }
                Err(SaleError::InsufficientStock { requested, available }) => {
                    assert_eq!(requested, quantity);
                    assert_eq!(available, 100 - sold);
                }
                Err(other) => panic!("Unexpected error: {other}"),
            }
        }

        // 1 + 7 + 20 + 3 + 60 = 91; 9 still fits, 15 does not.
        assert_eq!(sold, 100);
        assert_eq!(stock_of(&system, 2).await, 0);

        let ledger = system.sale_client.list_sales().await.unwrap();
        assert_eq!(ledger, accepted);
        let ids: Vec<u64> = ledger.iter().map(|sale| sale.id).collect();
        assert_eq!(ids, (1..=6).collect::<Vec<u64>>());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_sales_never_oversell() {
        let system = seeded_system().await;
        let sale_client = Arc::new(system.sale_client.clone());

        // Product 4 starts with 20 units; 12 buyers want 3 each.
        let tasks: Vec<_> = (0..12)
            .map(|_| {
                let client = Arc::clone(&sale_client);
                tokio::spawn(async move { client.register_sale(4, 3, None).await })
            })
            .collect();

        let mut succeeded = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => succeeded += 1,
                Err(SaleError::InsufficientStock { .. }) => {}
                Err(other) => panic!("Unexpected error: {other}"),
            }
        }

        assert_eq!(succeeded, 6);
        assert_eq!(stock_of(&system, 4).await, 2);
        assert_eq!(system.sale_client.list_sales().await.unwrap().len(), 6);

        drop(sale_client);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_seed_rejects_blank_product() {
        let catalog = vec![ProductCreate {
            name: String::new(),
            price: 1,
            quantity: 1,
            category: "Varios".to_string(),
        }];
        assert!(matches!(InventorySystem::start(catalog).await, Err(ProductError::InvalidProduct(_))));
    }
}
