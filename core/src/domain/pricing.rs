//! # Pricing Policy
//!
//! A rental is billed per started day: the duration between pickup and
//! drop-off is rounded up to whole days, and even a zero-length rental bills
//! one day.

use chrono::{DateTime, Utc};

use crate::domain::models::money::Money;

const SECONDS_PER_DAY: i64 = 86_400;

/// Number of days billed for a rental between `pickup` and `drop_off`.
///
/// Callers must have validated `drop_off >= pickup`; an inverted interval is
/// clamped to the one-day minimum rather than going negative.
pub fn billable_days(pickup: DateTime<Utc>, drop_off: DateTime<Utc>) -> u32 {
    let seconds = (drop_off - pickup).num_seconds().max(0);
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    days.max(1) as u32
}

/// Derives the total price: billable days times the model's daily rate.
pub fn price_for(daily_rate: Money, pickup: DateTime<Utc>, drop_off: DateTime<Utc>) -> Money {
    daily_rate.times(billable_days(pickup, drop_off))
}
