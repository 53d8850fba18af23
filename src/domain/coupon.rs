/// An issued coupon code. Nothing in the current surface sets `expired`;
/// the flag exists for a future redeem operation and is checked at checkout.
#[derive(Debug, Clone)]
pub struct Coupon {
    pub code: String,
    pub expired: bool,
}

/// Result of looking a coupon up during checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponStatus {
    Valid,
    NotFound,
    Expired,
}
