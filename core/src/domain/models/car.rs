use uuid::Uuid;

use crate::domain::models::money::Money;

/// A catalog entry: every car of the same model rents at the same daily rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarModel {
    pub id: Uuid,
    pub daily_rate: Money,
}

impl CarModel {
    pub fn new(id: Uuid, daily_rate: Money) -> Self {
        Self { id, daily_rate }
    }
}

/// A physical car, owning its catalog model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: Uuid,
    pub model: CarModel,
}

impl Car {
    pub fn new(id: Uuid, model: CarModel) -> Self {
        Self { id, model }
    }
}
