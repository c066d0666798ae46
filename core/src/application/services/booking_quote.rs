use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use rentr_common::clock::Clock;

use crate::domain::dates::{DateParser, UnrecognizedDateExpression};
use crate::domain::models::money::Money;
use crate::domain::models::rental::{ensure_chronological, RentalValidationError};
use crate::domain::pricing;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error(transparent)]
    UnrecognizedDate(#[from] UnrecognizedDateExpression),

    #[error(transparent)]
    Validation(#[from] RentalValidationError),
}

/// A priced, not-yet-booked rental.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalQuote {
    pub pickup_date_time: DateTime<Utc>,
    pub drop_off_date_time: DateTime<Utc>,
    pub billable_days: u32,
    pub total_price: Money,
}

/// Prices a prospective rental from relative date expressions.
///
/// The reference instant comes from the injected [`Clock`], so a pinned clock
/// makes quoting fully reproducible.
pub struct BookingQuoteService {
    parser: DateParser,
    clock: Arc<dyn Clock>,
}

impl BookingQuoteService {
    pub fn new(parser: DateParser, clock: Arc<dyn Clock>) -> Self {
        Self { parser, clock }
    }

    pub fn quote(
        &self,
        pickup_expression: &str,
        drop_off_expression: &str,
        daily_rate: Money,
    ) -> Result<RentalQuote, QuoteError> {
        let reference = self.clock.now();
        let pickup = self.parser.parse(pickup_expression, reference)?;
        let drop_off = self.parser.parse(drop_off_expression, reference)?;
        ensure_chronological(pickup, drop_off)?;

        let billable_days = pricing::billable_days(pickup, drop_off);
        let total_price = daily_rate.times(billable_days);
        debug!(%pickup, %drop_off, billable_days, %total_price, "quoted rental");

        Ok(RentalQuote {
            pickup_date_time: pickup,
            drop_off_date_time: drop_off,
            billable_days,
            total_price,
        })
    }
}
