use std::env;

use rust_decimal::Decimal;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter passed to the tracing subscriber.
    pub log_level: String,
    /// Daily rate applied by `quote` when none is given on the command line.
    pub default_daily_rate: Decimal,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_daily_rate: env::var("RENTR_DAILY_RATE")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_else(|| Decimal::new(100, 0)),
        }
    }
}
