//! In-memory stores. Each store exposes only the narrow read/write surface
//! the services need; the [`Stores`] aggregate is shared behind a single
//! mutex so every service operation runs as one exclusive section (cart
//! mutation and its stock adjustment, checkout's order insert and ordered
//! flip, order-count read and issuance trigger).

pub mod carts;
pub mod coupons;
pub mod orders;
pub mod products;
pub mod users;

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::errors::DomainError;

pub use carts::CartStore;
pub use coupons::CouponStore;
pub use orders::OrderStore;
pub use products::ProductStore;
pub use users::UserStore;

#[derive(Debug, Default)]
pub struct Stores {
    pub products: ProductStore,
    pub carts: CartStore,
    pub coupons: CouponStore,
    pub orders: OrderStore,
    pub users: UserStore,
}

impl Stores {
    /// Empty stores; tests seed what they need.
    pub fn new() -> Self {
        Self {
            products: ProductStore::default(),
            carts: CartStore::new(),
            coupons: CouponStore::new(),
            orders: OrderStore::new(),
            users: UserStore::default(),
        }
    }

    /// Stores preloaded with the shipped catalog and user directory.
    pub fn seeded() -> Self {
        Self {
            products: ProductStore::seeded(),
            carts: CartStore::new(),
            coupons: CouponStore::new(),
            orders: OrderStore::new(),
            users: UserStore::seeded(),
        }
    }

    pub fn into_shared(self) -> SharedStores {
        Arc::new(Mutex::new(self))
    }
}

/// Handle injected into the services. One lock guards all stores.
pub type SharedStores = Arc<Mutex<Stores>>;

/// Acquires the store lock, folding poisoning into `Internal` so operations
/// stay total instead of panicking across the boundary.
pub fn lock(stores: &SharedStores) -> Result<MutexGuard<'_, Stores>, DomainError> {
    stores
        .lock()
        .map_err(|_| DomainError::Internal("store lock poisoned".to_string()))
}
