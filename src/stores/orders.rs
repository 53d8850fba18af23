use crate::domain::order::Order;

/// Append-only store of completed orders. Insertion order is the order
/// sequence used by the nth-order coupon trigger and analytics iteration.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the order and returns its 1-based sequence number.
    pub fn push(&mut self, order: Order) -> u64 {
        self.orders.push(order);
        self.orders.len() as u64
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
