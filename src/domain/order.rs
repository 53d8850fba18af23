use bigdecimal::BigDecimal;

use super::cart::Cart;
use super::user::User;

/// A completed checkout. Immutable once created. `total` always records the
/// pre-discount subtotal; the discount fields are present only when a coupon
/// was applied. The cart is cloned in at checkout time so analytics can read
/// order history without touching the cart store.
#[derive(Debug, Clone)]
pub struct Order {
    pub total: BigDecimal,
    pub user: User,
    pub cart: Cart,
    pub discounted_amount: Option<BigDecimal>,
    pub coupon_code: Option<String>,
}

/// What checkout hands back: the amount charged (discounted when a coupon
/// applied) and the code of a freshly issued nth-order coupon, or `""` when
/// this order did not land on the interval boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub total: BigDecimal,
    pub coupon_code: String,
}

/// Aggregate view over the order store.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub total_items_purchased: u64,
    pub total_purchase_amount: BigDecimal,
    pub discount_codes: Vec<String>,
    pub total_discount_amount: BigDecimal,
}
