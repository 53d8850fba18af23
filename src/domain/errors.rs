use thiserror::Error;

/// Failure taxonomy shared by every core operation. Operations are total:
/// they return a success value or exactly one of these kinds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown user")]
    Unauthenticated,
    #[error("Operation requires a different role")]
    Forbidden,
    #[error("Product not found")]
    ProductNotFound,
    #[error("Product is out of stock")]
    OutOfStock,
    #[error("No active cart for user")]
    NoActiveCart,
    #[error("Product is not in the cart")]
    ItemNotInCart,
    #[error("Coupon not found")]
    CouponNotFound,
    #[error("Coupon has expired")]
    CouponExpired,
    #[error("Order count has not reached the coupon interval")]
    NotNthOrder,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Stable machine-readable code surfaced in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidInput(_) => "INVALID_INPUT",
            DomainError::Unauthenticated => "UNAUTHENTICATED",
            DomainError::Forbidden => "FORBIDDEN",
            DomainError::ProductNotFound => "PRODUCT_NOT_FOUND",
            DomainError::OutOfStock => "OUT_OF_STOCK",
            DomainError::NoActiveCart => "NO_ACTIVE_CART",
            DomainError::ItemNotInCart => "ITEM_NOT_IN_CART",
            DomainError::CouponNotFound => "COUPON_NOT_FOUND",
            DomainError::CouponExpired => "COUPON_EXPIRED",
            DomainError::NotNthOrder => "NOT_NTH_ORDER",
            DomainError::Internal(_) => "INTERNAL",
        }
    }
}
