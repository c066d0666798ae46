use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::money::Money;

/// Datastore operation errors.
#[derive(Debug, Error)]
pub enum DatastoreError {
    #[error("row {id} already exists in table '{table}'")]
    DuplicateKey { table: &'static str, id: Uuid },

    #[error("row {id} in table '{table}' references missing row {missing} in table '{referenced}'")]
    BrokenReference {
        table: &'static str,
        id: Uuid,
        referenced: &'static str,
        missing: Uuid,
    },

    /// A writer panicked while holding a table lock.
    #[error("lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Clone)]
pub struct CustomerRow {
    pub id: Uuid,
    pub full_name: String,
}

#[derive(Debug, Clone)]
pub struct CarModelRow {
    pub id: Uuid,
    pub daily_rate: Money,
}

#[derive(Debug, Clone)]
pub struct CarRow {
    pub id: Uuid,
    pub model_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CarRentalRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub car_id: Uuid,
    pub pickup_date_time: DateTime<Utc>,
    pub drop_off_date_time: DateTime<Utc>,
    pub total_price: Money,
}

/// One table per entity, rows keyed by primary key.
///
/// Inserts reject duplicate primary keys; foreign keys are plain ids and are
/// resolved at read time by the repository built on top.
#[derive(Debug, Default)]
pub struct InMemoryDatastore {
    customers: RwLock<HashMap<Uuid, CustomerRow>>,
    car_models: RwLock<HashMap<Uuid, CarModelRow>>,
    cars: RwLock<HashMap<Uuid, CarRow>>,
    rentals: RwLock<HashMap<Uuid, CarRentalRow>>,
}

impl InMemoryDatastore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_customer(&self, row: CustomerRow) -> Result<(), DatastoreError> {
        insert(&self.customers, "customers", row.id, row)
    }

    pub fn insert_car_model(&self, row: CarModelRow) -> Result<(), DatastoreError> {
        insert(&self.car_models, "car_models", row.id, row)
    }

    pub fn insert_car(&self, row: CarRow) -> Result<(), DatastoreError> {
        insert(&self.cars, "cars", row.id, row)
    }

    pub fn insert_rental(&self, row: CarRentalRow) -> Result<(), DatastoreError> {
        insert(&self.rentals, "car_rentals", row.id, row)
    }

    pub fn customer(&self, id: Uuid) -> Result<Option<CustomerRow>, DatastoreError> {
        fetch(&self.customers, id)
    }

    pub fn car_model(&self, id: Uuid) -> Result<Option<CarModelRow>, DatastoreError> {
        fetch(&self.car_models, id)
    }

    pub fn car(&self, id: Uuid) -> Result<Option<CarRow>, DatastoreError> {
        fetch(&self.cars, id)
    }

    pub fn rental(&self, id: Uuid) -> Result<Option<CarRentalRow>, DatastoreError> {
        fetch(&self.rentals, id)
    }

    /// Drops every row from every table.
    pub fn reset(&self) -> Result<(), DatastoreError> {
        clear(&self.customers)?;
        clear(&self.car_models)?;
        clear(&self.cars)?;
        clear(&self.rentals)
    }

    pub fn rental_count(&self) -> Result<usize, DatastoreError> {
        Ok(self
            .rentals
            .read()
            .map_err(|_| DatastoreError::LockPoisoned)?
            .len())
    }
}

fn insert<R>(
    table: &RwLock<HashMap<Uuid, R>>,
    name: &'static str,
    id: Uuid,
    row: R,
) -> Result<(), DatastoreError> {
    let mut rows = table.write().map_err(|_| DatastoreError::LockPoisoned)?;
    if rows.contains_key(&id) {
        return Err(DatastoreError::DuplicateKey { table: name, id });
    }
    rows.insert(id, row);
    Ok(())
}

fn fetch<R: Clone>(
    table: &RwLock<HashMap<Uuid, R>>,
    id: Uuid,
) -> Result<Option<R>, DatastoreError> {
    let rows = table.read().map_err(|_| DatastoreError::LockPoisoned)?;
    Ok(rows.get(&id).cloned())
}

fn clear<R>(table: &RwLock<HashMap<Uuid, R>>) -> Result<(), DatastoreError> {
    let mut rows = table.write().map_err(|_| DatastoreError::LockPoisoned)?;
    rows.clear();
    Ok(())
}
