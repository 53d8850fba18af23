use bigdecimal::{BigDecimal, Zero};

use crate::application::auth;
use crate::domain::errors::DomainError;
use crate::domain::order::AnalyticsReport;
use crate::domain::user::{Role, User};
use crate::stores::{self, SharedStores};

/// Pure read over the order store, admin only.
pub struct AnalyticsService {
    stores: SharedStores,
}

impl AnalyticsService {
    pub fn new(stores: SharedStores) -> Self {
        Self { stores }
    }

    pub fn compute(&self, user: &User) -> Result<AnalyticsReport, DomainError> {
        auth::require_role(user, Role::Admin)?;
        let stores = stores::lock(&self.stores)?;

        let mut report = AnalyticsReport {
            total_items_purchased: 0,
            total_purchase_amount: BigDecimal::zero(),
            discount_codes: Vec::new(),
            total_discount_amount: BigDecimal::zero(),
        };
        for order in stores.orders.iter() {
            report.total_items_purchased += order
                .cart
                .line_items
                .iter()
                .map(|li| u64::from(li.quantity))
                .sum::<u64>();
            let discount = order
                .discounted_amount
                .clone()
                .unwrap_or_else(BigDecimal::zero);
            // Revenue is net of discount; order.total is the pre-discount subtotal.
            report.total_purchase_amount += &order.total - &discount;
            report.total_discount_amount += discount;
            if let Some(code) = &order.coupon_code {
                report.discount_codes.push(code.clone());
            }
        }
        Ok(report)
    }
}
