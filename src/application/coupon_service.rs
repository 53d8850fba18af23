use rand::Rng;

use crate::application::auth;
use crate::domain::coupon::{Coupon, CouponStatus};
use crate::domain::errors::DomainError;
use crate::domain::user::{Role, User};
use crate::stores::{self, CouponStore, SharedStores};

const CODE_LEN: usize = 6;
const CODE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws a 6-character code uniformly from `[A-Z0-9]`. Non-cryptographic,
/// and collisions with existing codes are possible and not checked.
pub(crate) fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| CODE_CHARS[rng.random_range(0..CODE_CHARS.len())] as char)
        .collect()
}

/// Generates a code and records it as an unexpired coupon. Called with the
/// store lock already held so issuance stays inside the caller's exclusive
/// section.
pub(crate) fn issue_into(coupons: &mut CouponStore) -> String {
    let code = generate_code();
    coupons.insert(Coupon {
        code: code.clone(),
        expired: false,
    });
    log::info!("issued coupon {}", code);
    code
}

pub(crate) fn status_of(coupons: &CouponStore, code: &str) -> CouponStatus {
    match coupons.find(code) {
        None => CouponStatus::NotFound,
        Some(c) if c.expired => CouponStatus::Expired,
        Some(_) => CouponStatus::Valid,
    }
}

/// Admin-triggered coupon issuance. The automatic nth-order path lives in
/// checkout; this variant lets an admin issue the coupon for a boundary
/// explicitly and fails `NotNthOrder` off the boundary.
pub struct CouponService {
    stores: SharedStores,
    interval: u64,
}

impl CouponService {
    pub fn new(stores: SharedStores, interval: u64) -> Self {
        Self { stores, interval }
    }

    pub fn issue_for_admin(&self, user: &User) -> Result<String, DomainError> {
        auth::require_role(user, Role::Admin)?;
        let mut stores = stores::lock(&self.stores)?;
        let count = stores.orders.len() as u64;
        if count == 0 || count % self.interval != 0 {
            return Err(DomainError::NotNthOrder);
        }
        Ok(issue_into(&mut stores.coupons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Cart;
    use crate::domain::order::Order;
    use crate::stores::Stores;
    use bigdecimal::BigDecimal;

    fn admin() -> User {
        User::new(1, "Amit Sharma", "Delhi, India", Role::Admin)
    }

    fn buyer() -> User {
        User::new(2, "Sophia Williams", "New York, USA", Role::User)
    }

    fn dummy_order(n: u64) -> Order {
        Order {
            total: BigDecimal::from(100u32),
            user: buyer(),
            cart: Cart {
                cart_id: n,
                user_id: 2,
                line_items: vec![],
                ordered: true,
            },
            discounted_amount: None,
            coupon_code: None,
        }
    }

    fn service_with_orders(count: u64, interval: u64) -> (CouponService, SharedStores) {
        let mut stores = Stores::new();
        for n in 0..count {
            stores.orders.push(dummy_order(n));
        }
        let shared = stores.into_shared();
        (CouponService::new(shared.clone(), interval), shared)
    }

    #[test]
    fn generated_codes_are_six_uppercase_alphanumerics() {
        for _ in 0..50 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        }
    }

    #[test]
    fn status_reflects_store_contents() {
        let mut coupons = CouponStore::new();
        coupons.insert(Coupon {
            code: "EXPIRD".to_string(),
            expired: true,
        });
        let live = issue_into(&mut coupons);
        assert_eq!(status_of(&coupons, &live), CouponStatus::Valid);
        assert_eq!(status_of(&coupons, "EXPIRD"), CouponStatus::Expired);
        assert_eq!(status_of(&coupons, "NOPE00"), CouponStatus::NotFound);
    }

    #[test]
    fn non_admin_is_forbidden_regardless_of_order_state() {
        let (service, _shared) = service_with_orders(5, 5);
        assert_eq!(service.issue_for_admin(&buyer()), Err(DomainError::Forbidden));
    }

    #[test]
    fn admin_issuance_only_on_interval_boundary() {
        let (service, _shared) = service_with_orders(4, 5);
        assert_eq!(service.issue_for_admin(&admin()), Err(DomainError::NotNthOrder));

        let (service, shared) = service_with_orders(10, 5);
        let code = service.issue_for_admin(&admin()).expect("boundary issuance");
        assert!(shared.lock().expect("lock").coupons.contains(&code));
    }

    #[test]
    fn zero_orders_is_not_a_boundary() {
        let (service, _shared) = service_with_orders(0, 5);
        assert_eq!(service.issue_for_admin(&admin()), Err(DomainError::NotNthOrder));
    }
}
