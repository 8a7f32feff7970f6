// DTOs for Product
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub category: String,
}
