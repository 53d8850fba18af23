use crate::domain::cart::Cart;

/// In-memory cart store. Ids come from a monotonic counter so a cart id is
/// never reused even after emptied carts are deleted.
#[derive(Debug)]
pub struct CartStore {
    carts: Vec<Cart>,
    next_id: u64,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            carts: Vec::new(),
            next_id: 1,
        }
    }

    /// The caller's cart with `ordered == false`, if any.
    pub fn active_cart_for(&self, user_id: u64) -> Option<&Cart> {
        self.carts
            .iter()
            .find(|c| c.user_id == user_id && !c.ordered)
    }

    pub fn active_cart_for_mut(&mut self, user_id: u64) -> Option<&mut Cart> {
        self.carts
            .iter_mut()
            .find(|c| c.user_id == user_id && !c.ordered)
    }

    pub fn find_by_id(&self, cart_id: u64) -> Option<&Cart> {
        self.carts.iter().find(|c| c.cart_id == cart_id)
    }

    /// The user's active cart, created empty and unordered when absent.
    pub fn get_or_create_active(&mut self, user_id: u64) -> &mut Cart {
        let idx = match self
            .carts
            .iter()
            .position(|c| c.user_id == user_id && !c.ordered)
        {
            Some(idx) => idx,
            None => {
                self.carts.push(Cart {
                    cart_id: self.next_id,
                    user_id,
                    line_items: Vec::new(),
                    ordered: false,
                });
                self.next_id += 1;
                self.carts.len() - 1
            }
        };
        &mut self.carts[idx]
    }

    pub fn delete(&mut self, cart_id: u64) {
        self.carts.retain(|c| c.cart_id != cart_id);
    }

    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_assign_monotonic_ids() {
        let mut store = CartStore::new();
        let first = store.get_or_create_active(1).cart_id;
        let second = store.get_or_create_active(2).cart_id;
        assert_eq!((first, second), (1, 2));
    }

    #[test]
    fn existing_active_cart_is_reused() {
        let mut store = CartStore::new();
        let first = store.get_or_create_active(1).cart_id;
        let again = store.get_or_create_active(1).cart_id;
        assert_eq!(first, again);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn deleted_cart_ids_are_not_reused() {
        let mut store = CartStore::new();
        let first = store.get_or_create_active(1).cart_id;
        store.delete(first);
        let second = store.get_or_create_active(1).cart_id;
        assert_ne!(first, second);
        assert!(store.find_by_id(first).is_none());
    }

    #[test]
    fn ordered_cart_is_not_active() {
        let mut store = CartStore::new();
        let cart_id = store.get_or_create_active(7).cart_id;
        store
            .active_cart_for_mut(7)
            .expect("cart should be active")
            .ordered = true;
        assert!(store.active_cart_for(7).is_none());
        // Still retrievable by id as order history.
        assert!(store.find_by_id(cart_id).is_some());
    }
}
