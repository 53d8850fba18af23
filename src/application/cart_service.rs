use bigdecimal::{BigDecimal, Zero};

use crate::domain::cart::{Cart, CartSnapshot, LineItem, LineItemView, RemoveOutcome};
use crate::domain::errors::DomainError;
use crate::domain::user::User;
use crate::stores::{self, ProductStore, SharedStores};

/// Cart mutation: adding and removing single units, with the paired stock
/// adjustment applied in the same exclusive section.
pub struct CartService {
    stores: SharedStores,
}

impl CartService {
    pub fn new(stores: SharedStores) -> Self {
        Self { stores }
    }

    /// Adds one unit of the product to the caller's active cart, creating
    /// the cart lazily, and decrements catalog stock by one.
    pub fn add_line_item(&self, user: &User, product_id: u64) -> Result<CartSnapshot, DomainError> {
        let mut guard = stores::lock(&self.stores)?;
        let stores = &mut *guard;

        let product = stores
            .products
            .find(product_id)
            .ok_or(DomainError::ProductNotFound)?;
        if product.stock_quantity == 0 {
            return Err(DomainError::OutOfStock);
        }

        let cart = stores.carts.get_or_create_active(user.user_id);
        match cart.line_item_mut(product_id) {
            Some(item) => item.quantity += 1,
            None => cart.line_items.push(LineItem {
                product_id,
                quantity: 1,
            }),
        }

        decrement_stock(&mut stores.products, product_id)?;

        let cart = stores
            .carts
            .active_cart_for(user.user_id)
            .ok_or_else(|| DomainError::Internal("cart vanished during add".to_string()))?;
        log::debug!(
            "user {} cart {} now holds {} line item(s)",
            user.user_id,
            cart.cart_id,
            cart.line_items.len()
        );
        snapshot(cart, &stores.products)
    }

    /// Removes one unit of the product from the caller's active cart and
    /// returns the stock to the catalog. Deletes the cart when the removal
    /// empties it.
    pub fn remove_line_item(
        &self,
        user: &User,
        product_id: u64,
    ) -> Result<RemoveOutcome, DomainError> {
        let mut guard = stores::lock(&self.stores)?;
        let stores = &mut *guard;

        if stores.products.find(product_id).is_none() {
            return Err(DomainError::ProductNotFound);
        }

        let cart = stores
            .carts
            .active_cart_for_mut(user.user_id)
            .ok_or(DomainError::NoActiveCart)?;
        let cart_id = cart.cart_id;

        let idx = cart
            .line_items
            .iter()
            .position(|li| li.product_id == product_id)
            .ok_or(DomainError::ItemNotInCart)?;
        if cart.line_items[idx].quantity > 1 {
            cart.line_items[idx].quantity -= 1;
        } else {
            cart.line_items.remove(idx);
        }
        let emptied = cart.line_items.is_empty();
        if emptied {
            stores.carts.delete(cart_id);
            log::debug!("user {} cart {} emptied and deleted", user.user_id, cart_id);
        }

        increment_stock(&mut stores.products, product_id)?;

        if emptied {
            return Ok(RemoveOutcome::CartDeleted);
        }
        let cart = stores
            .carts
            .find_by_id(cart_id)
            .ok_or_else(|| DomainError::Internal("cart vanished during remove".to_string()))?;
        Ok(RemoveOutcome::Updated(snapshot(cart, &stores.products)?))
    }
}

fn decrement_stock(products: &mut ProductStore, product_id: u64) -> Result<(), DomainError> {
    let product = products
        .find_mut(product_id)
        .ok_or_else(|| DomainError::Internal("product vanished mid-operation".to_string()))?;
    product.stock_quantity -= 1;
    Ok(())
}

fn increment_stock(products: &mut ProductStore, product_id: u64) -> Result<(), DomainError> {
    let product = products
        .find_mut(product_id)
        .ok_or_else(|| DomainError::Internal("product vanished mid-operation".to_string()))?;
    product.stock_quantity += 1;
    Ok(())
}

/// Prices the cart against the current catalog. Catalog entries are never
/// deleted, so a dangling line item is an internal fault.
pub(crate) fn snapshot(cart: &Cart, products: &ProductStore) -> Result<CartSnapshot, DomainError> {
    let mut items = Vec::with_capacity(cart.line_items.len());
    for li in &cart.line_items {
        let product = products
            .find(li.product_id)
            .ok_or_else(|| DomainError::Internal("line item references unknown product".to_string()))?;
        items.push(LineItemView {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price.clone(),
            quantity: li.quantity,
        });
    }
    let cart_total = items
        .iter()
        .fold(BigDecimal::zero(), |acc, i| acc + &i.price * BigDecimal::from(i.quantity));
    Ok(CartSnapshot {
        cart_id: cart.cart_id,
        user_id: cart.user_id,
        items,
        cart_total,
    })
}

/// Sum of price × quantity over the cart at current catalog prices.
pub(crate) fn subtotal(cart: &Cart, products: &ProductStore) -> Result<BigDecimal, DomainError> {
    Ok(snapshot(cart, products)?.cart_total)
}
