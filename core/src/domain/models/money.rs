use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("monetary amount cannot be negative: {amount}")]
pub struct NegativeAmount {
    pub amount: Decimal,
}

/// A non-negative monetary amount.
///
/// Stored as a [`Decimal`] so daily rates and totals never pick up binary
/// floating point noise. Deserialization goes through [`Money::new`], so a
/// negative amount cannot enter the domain through the serde boundary either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal) -> Result<Self, NegativeAmount> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(NegativeAmount { amount });
        }
        Ok(Self(amount))
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiplies the amount by a whole number of days.
    pub fn times(&self, days: u32) -> Money {
        Money(self.0 * Decimal::from(days))
    }
}

impl TryFrom<Decimal> for Money {
    type Error = NegativeAmount;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Money::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
