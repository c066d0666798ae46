//! Quoting and date resolution against a pinned clock.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use rentr_common::clock::FixedClock;
use rentr_core::application::services::booking_quote::BookingQuoteService;
use rentr_core::domain::dates::DateParser;
use rentr_core::domain::models::money::Money;

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap()
}

#[test]
fn test_quotes_match_the_seeded_scenarios() {
    let service = BookingQuoteService::new(DateParser::new(), Arc::new(FixedClock::new(reference())));

    let cases = [
        ("today", "tomorrow", dec!(100), 1, dec!(100)),
        ("tomorrow", "in 2 days", dec!(200), 1, dec!(200)),
        ("today", "in 7 days", dec!(50), 7, dec!(350)),
    ];

    for (pickup, drop_off, rate, expected_days, expected_total) in cases {
        let quote = service
            .quote(pickup, drop_off, Money::new(rate).unwrap())
            .unwrap();
        assert_eq!(quote.billable_days, expected_days, "{pickup} -> {drop_off}");
        assert_eq!(
            quote.total_price,
            Money::new(expected_total).unwrap(),
            "{pickup} -> {drop_off}"
        );
    }
}

#[test]
fn test_parsing_is_deterministic_for_a_fixed_reference() {
    let parser = DateParser::new();

    for expression in ["today", "tomorrow", "in 1 day", "in 30 days"] {
        let first = parser.parse(expression, reference()).unwrap();
        let second = parser.parse(expression, reference()).unwrap();
        assert_eq!(first, second, "{expression}");
    }
}

#[test]
fn test_quoting_is_deterministic_for_a_fixed_clock() {
    let service = BookingQuoteService::new(DateParser::new(), Arc::new(FixedClock::new(reference())));
    let rate = Money::new(dec!(75)).unwrap();

    let first = service.quote("tomorrow", "in 4 days", rate).unwrap();
    let second = service.quote("tomorrow", "in 4 days", rate).unwrap();
    assert_eq!(first, second);
}
