use crate::product_actor::ProductCreate;

/// Catalog loaded at startup. Ids are assigned in this order, starting at 1.
pub fn default_catalog() -> Vec<ProductCreate> {
    [
        ("Mascarillas N95", 2500, 50, "Protección"),
        ("Guantes de Nitrilo", 1500, 100, "Protección"),
        ("Alcohol Antiséptico", 5000, 30, "Desinfección"),
        ("Bata Quirúrgica", 12000, 20, "Indumentaria"),
    ]
    .into_iter()
    .map(|(name, price, quantity, category)| ProductCreate {
        name: name.to_string(),
        price,
        quantity,
        category: category.to_string(),
    })
    .collect()
}
