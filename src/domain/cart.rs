use bigdecimal::BigDecimal;

/// A (product, quantity) pairing inside a cart. Only the product id is kept;
/// names and prices are always resolved from the live catalog, so a price
/// change between add-to-cart and checkout applies at checkout time.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub product_id: u64,
    pub quantity: u32,
}

/// A user's cart. At most one cart per user has `ordered == false` (the
/// active cart). Once `ordered` flips the cart is retained permanently as
/// part of order history; an unordered cart emptied by removals is deleted.
#[derive(Debug, Clone)]
pub struct Cart {
    pub cart_id: u64,
    pub user_id: u64,
    pub line_items: Vec<LineItem>,
    pub ordered: bool,
}

impl Cart {
    pub fn line_item_mut(&mut self, product_id: u64) -> Option<&mut LineItem> {
        self.line_items
            .iter_mut()
            .find(|li| li.product_id == product_id)
    }
}

/// One cart line with catalog data resolved at snapshot time.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemView {
    pub product_id: u64,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
}

/// Read model returned by cart operations: the cart's contents priced
/// against the current catalog, plus the running total.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub cart_id: u64,
    pub user_id: u64,
    pub items: Vec<LineItemView>,
    pub cart_total: BigDecimal,
}

/// Outcome of removing a line item. `CartDeleted` means the removal emptied
/// the cart and it was dropped from the store; callers must handle both
/// branches explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Updated(CartSnapshot),
    CartDeleted,
}
