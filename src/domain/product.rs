use bigdecimal::BigDecimal;

/// A catalog entry. Stock is adjusted eagerly per unit as items enter and
/// leave carts; products are never deleted.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: BigDecimal,
    pub stock_quantity: u32,
}

impl Product {
    pub fn new(id: u64, name: &str, price: u64, stock_quantity: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            price: BigDecimal::from(price),
            stock_quantity,
        }
    }
}
