use std::env;

pub const DEFAULT_COUPON_INTERVAL: u64 = 5;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Every nth order triggers automatic coupon issuance.
    pub coupon_interval: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            coupon_interval: coupon_interval_from(
                env::var("NTH_ORDER_COUPON_INTERVAL").ok().as_deref(),
            ),
        }
    }
}

/// Unset, non-numeric, and zero all fall back to the default interval.
fn coupon_interval_from(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(DEFAULT_COUPON_INTERVAL)
}
