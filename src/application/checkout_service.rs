use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

use crate::application::{cart_service, coupon_service};
use crate::domain::coupon::CouponStatus;
use crate::domain::errors::DomainError;
use crate::domain::order::{CheckoutReceipt, Order};
use crate::domain::user::User;
use crate::stores::{self, SharedStores};

const MAX_COUPON_LEN: usize = 6;

/// Converts the caller's active cart into an order: subtotal from live
/// catalog prices, optional 10% coupon discount, order insert, ordered-flag
/// flip, and the nth-order coupon trigger. The whole sequence runs under one
/// exclusive section, so no concurrent add/remove or second checkout can
/// interleave.
pub struct CheckoutService {
    stores: SharedStores,
    coupon_interval: u64,
}

impl CheckoutService {
    pub fn new(stores: SharedStores, coupon_interval: u64) -> Self {
        Self {
            stores,
            coupon_interval,
        }
    }

    pub fn checkout(
        &self,
        user: &User,
        coupon_code: Option<&str>,
    ) -> Result<CheckoutReceipt, DomainError> {
        if let Some(code) = coupon_code {
            if code.len() > MAX_COUPON_LEN {
                return Err(DomainError::InvalidInput(format!(
                    "coupon code must be at most {} characters",
                    MAX_COUPON_LEN
                )));
            }
        }
        // An empty code means "no coupon", matching the wire format where the
        // field may be sent as "".
        let coupon_code = coupon_code.filter(|c| !c.is_empty());

        let mut guard = stores::lock(&self.stores)?;
        let stores = &mut *guard;

        let cart = stores
            .carts
            .active_cart_for(user.user_id)
            .ok_or(DomainError::NoActiveCart)?;
        let subtotal = cart_service::subtotal(cart, &stores.products)?;

        let discounted_amount = match coupon_code {
            Some(code) => match coupon_service::status_of(&stores.coupons, code) {
                CouponStatus::NotFound => return Err(DomainError::CouponNotFound),
                CouponStatus::Expired => return Err(DomainError::CouponExpired),
                CouponStatus::Valid => Some(ten_percent(&subtotal)),
            },
            None => None,
        };

        let cart = stores
            .carts
            .active_cart_for_mut(user.user_id)
            .ok_or(DomainError::NoActiveCart)?;
        cart.ordered = true;
        let cart = cart.clone();

        let sequence = stores.orders.push(Order {
            total: subtotal.clone(),
            user: user.clone(),
            cart,
            discounted_amount: discounted_amount.clone(),
            coupon_code: coupon_code.map(str::to_string),
        });
        log::info!(
            "user {} placed order #{} (subtotal {})",
            user.user_id,
            sequence,
            subtotal
        );

        // Issue a coupon when this order's 1-based sequence number lands on
        // the configured interval.
        let issued = if sequence % self.coupon_interval == 0 {
            coupon_service::issue_into(&mut stores.coupons)
        } else {
            String::new()
        };

        let total = match discounted_amount {
            Some(discount) => subtotal - discount,
            None => subtotal,
        };
        Ok(CheckoutReceipt {
            total,
            coupon_code: issued,
        })
    }
}

/// Exact 10% of the subtotal (multiplication by 0.1, no floats).
fn ten_percent(subtotal: &BigDecimal) -> BigDecimal {
    subtotal * BigDecimal::new(BigInt::from(1), 1)
}
