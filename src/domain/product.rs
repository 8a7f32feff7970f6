use serde::{Deserialize, Serialize};

/// Represents a product in the catalog.
///
/// Wire names follow the Spanish JSON contract the frontend already consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unit price in whole pesos.
    #[serde(rename = "precio")]
    pub price: u64,
    /// Stock on hand.
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "categoria")]
    pub category: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u64,
        quantity: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            category: category.into(),
        }
    }

    /// Case-insensitive substring match on the product name. A blank needle matches everything.
    pub fn name_matches(&self, needle: &str) -> bool {
        let needle = needle.trim();
        needle.is_empty() || self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_matching_ignores_case() {
        let product = Product::new(1, "Mascarillas N95", 2500, 50, "Protección");
        assert!(product.name_matches("n95"));
        assert!(product.name_matches("MASCAR"));
        assert!(product.name_matches("  "));
        assert!(!product.name_matches("guantes"));
    }

    #[test]
    fn serializes_with_wire_names() {
        let product = Product::new(2, "Guantes de Nitrilo", 1500, 100, "Protección");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 2,
                "nombre": "Guantes de Nitrilo",
                "precio": 1500,
                "cantidad": 100,
                "categoria": "Protección"
            })
        );
    }
}
