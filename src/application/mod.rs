pub mod analytics_service;
pub mod auth;
pub mod cart_service;
pub mod checkout_service;
pub mod coupon_service;

pub use analytics_service::AnalyticsService;
pub use auth::IdentityService;
pub use cart_service::CartService;
pub use checkout_service::CheckoutService;
pub use coupon_service::CouponService;
