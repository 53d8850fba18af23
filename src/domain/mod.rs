pub mod cart;
pub mod coupon;
pub mod errors;
pub mod order;
pub mod product;
pub mod user;
