use crate::domain::product::Product;

/// In-memory catalog. Stock quantities move as items enter and leave carts;
/// entries are never removed.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog the service ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "Wireless Mouse", 2000, 7),
            Product::new(2, "Mechanical Keyboard", 3000, 3),
            Product::new(3, "USB-C Hub", 1500, 5),
            Product::new(4, "Noise Cancelling Headphones", 15000, 2),
            Product::new(5, "Portable SSD 1TB", 10000, 8),
            Product::new(6, "Smartphone Stand", 500, 10),
            Product::new(7, "Gaming Chair", 15000, 1),
            Product::new(8, "Webcam 1080p", 2000, 6),
            Product::new(9, "Bluetooth Speaker", 5000, 4),
            Product::new(10, "RGB LED Strip", 2300, 9),
        ])
    }

    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    #[test]
    fn seeded_catalog_resolves_by_id() {
        let store = ProductStore::seeded();
        let hub = store.find(3).expect("product 3 should exist");
        assert_eq!(hub.name, "USB-C Hub");
        assert_eq!(hub.price, BigDecimal::from(1500u32));
        assert_eq!(hub.stock_quantity, 5);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(ProductStore::seeded().find(99).is_none());
    }

    #[test]
    fn find_mut_allows_stock_adjustment() {
        let mut store = ProductStore::seeded();
        store.find_mut(1).expect("product 1").stock_quantity -= 1;
        assert_eq!(store.find(1).expect("product 1").stock_quantity, 6);
    }
}
