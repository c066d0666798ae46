//! # Time Source
//!
//! All date arithmetic in the workspace is anchored to a reference instant
//! handed in from the outside. Production code uses [`SystemClock`]; tests
//! pin the instant with [`FixedClock`] so every run is reproducible.
//!
//! Nothing below the application layer is allowed to call `Utc::now()`
//! directly.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the real system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the instant it was constructed with.
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
