use crate::domain::coupon::Coupon;

/// In-memory store of issued coupon codes.
#[derive(Debug, Default)]
pub struct CouponStore {
    coupons: Vec<Coupon>,
}

impl CouponStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    pub fn insert(&mut self, coupon: Coupon) {
        self.coupons.push(coupon);
    }
}
