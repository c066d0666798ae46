use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::car::Car;
use crate::domain::models::money::Money;
use crate::domain::pricing;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RentalValidationError {
    #[error("drop-off {drop_off} is before pickup {pickup}")]
    DropOffBeforePickup {
        pickup: DateTime<Utc>,
        drop_off: DateTime<Utc>,
    },

    #[error("total price {supplied} does not match {days} day(s) at {rate} (expected {expected})")]
    PriceMismatch {
        supplied: Money,
        expected: Money,
        days: u32,
        rate: Money,
    },
}

/// Fails when `drop_off` precedes `pickup`.
pub fn ensure_chronological(
    pickup: DateTime<Utc>,
    drop_off: DateTime<Utc>,
) -> Result<(), RentalValidationError> {
    if drop_off < pickup {
        return Err(RentalValidationError::DropOffBeforePickup { pickup, drop_off });
    }
    Ok(())
}

/// A booked rental: the aggregate root of the read model.
///
/// Invariants, enforced at construction:
/// * `drop_off >= pickup`
/// * `total_price` equals the pricing policy's derivation from the rental
///   duration and the car model's daily rate. The price is supplied by the
///   booking workflow, not recomputed here, but a mismatch is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarRental {
    id: Uuid,
    customer_id: Uuid,
    car: Car,
    pickup: DateTime<Utc>,
    drop_off: DateTime<Utc>,
    total_price: Money,
}

impl CarRental {
    pub fn new(
        id: Uuid,
        customer_id: Uuid,
        car: Car,
        pickup: DateTime<Utc>,
        drop_off: DateTime<Utc>,
        total_price: Money,
    ) -> Result<Self, RentalValidationError> {
        ensure_chronological(pickup, drop_off)?;

        let days = pricing::billable_days(pickup, drop_off);
        let expected = car.model.daily_rate.times(days);
        if expected != total_price {
            return Err(RentalValidationError::PriceMismatch {
                supplied: total_price,
                expected,
                days,
                rate: car.model.daily_rate,
            });
        }

        Ok(Self {
            id,
            customer_id,
            car,
            pickup,
            drop_off,
            total_price,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn pickup(&self) -> DateTime<Utc> {
        self.pickup
    }

    pub fn drop_off(&self) -> DateTime<Utc> {
        self.drop_off
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Snapshots the rental for transfer across the read boundary.
    pub fn to_dto(&self) -> CarRentalDTO {
        CarRentalDTO {
            id: self.id,
            customer_id: self.customer_id,
            car: CarDTO {
                id: self.car.id,
                model: CarModelDTO {
                    id: self.car.model.id,
                    daily_rate: self.car.model.daily_rate,
                },
            },
            pickup_date_time: self.pickup,
            drop_off_date_time: self.drop_off,
            total_price: self.total_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModelDTO {
    pub id: Uuid,
    pub daily_rate: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarDTO {
    pub id: Uuid,
    pub model: CarModelDTO,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRentalDTO {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub car: CarDTO,
    pub pickup_date_time: DateTime<Utc>,
    pub drop_off_date_time: DateTime<Utc>,
    pub total_price: Money,
}
