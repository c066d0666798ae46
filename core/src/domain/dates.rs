//! # Relative Date Expressions
//!
//! Booking input arrives as human-relative expressions ("today", "tomorrow",
//! "in 3 days"). [`DateParser`] resolves them against a reference instant
//! supplied by the caller; it never reads the system clock, so parsing is
//! deterministic and testable with a pinned reference.
//!
//! Supported forms:
//! * `today` - the reference instant itself.
//! * `tomorrow` - reference plus one day.
//! * `in N days` (or `in 1 day`) - reference plus `N` days.
//!
//! Matching is case-insensitive and tolerant of surrounding whitespace.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized date expression: '{expression}'")]
pub struct UnrecognizedDateExpression {
    pub expression: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DateParser;

impl DateParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(
        &self,
        expression: &str,
        reference: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, UnrecognizedDateExpression> {
        let normalized = expression.trim().to_ascii_lowercase();

        match normalized.as_str() {
            "today" => return Ok(reference),
            "tomorrow" => return Ok(reference + Duration::days(1)),
            _ => {}
        }

        if let Some(days) = parse_in_days(&normalized) {
            return Ok(reference + Duration::days(days));
        }

        Err(UnrecognizedDateExpression {
            expression: expression.to_string(),
        })
    }
}

/// Matches `in N day`/`in N days` with a non-negative `N`.
fn parse_in_days(input: &str) -> Option<i64> {
    let mut tokens = input.split_whitespace();

    if tokens.next()? != "in" {
        return None;
    }
    let count: i64 = tokens.next()?.parse().ok()?;
    let unit = tokens.next()?;
    if tokens.next().is_some() || count < 0 {
        return None;
    }

    match unit {
        "day" | "days" => Some(count),
        _ => None,
    }
}
