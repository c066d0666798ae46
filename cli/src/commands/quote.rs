use std::sync::Arc;

use rust_decimal::Decimal;

use rentr_common::clock::SystemClock;
use rentr_common::config::Config;
use rentr_core::application::services::booking_quote::BookingQuoteService;
use rentr_core::domain::dates::DateParser;
use rentr_core::domain::models::money::Money;

use crate::terminal::print;

pub fn quote(
    cfg: &Config,
    pickup: &str,
    drop_off: &str,
    rate: Option<Decimal>,
    json: bool,
) -> anyhow::Result<()> {
    let daily_rate = Money::new(rate.unwrap_or(cfg.default_daily_rate))?;

    // 1. Instantiate Dependencies
    let service = BookingQuoteService::new(DateParser::new(), Arc::new(SystemClock));

    // 2. Execute Service
    let quote = service.quote(pickup, drop_off, daily_rate)?;

    // 3. Present Results
    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    print::header("rental quote");
    print::aligned_line("Pickup", quote.pickup_date_time.to_rfc3339());
    print::aligned_line("Drop-off", quote.drop_off_date_time.to_rfc3339());
    print::aligned_line("Billable days", quote.billable_days);
    print::aligned_line("Daily rate", daily_rate);
    print::aligned_line("Total price", quote.total_price);
    Ok(())
}
