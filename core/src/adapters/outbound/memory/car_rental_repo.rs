use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::adapters::outbound::memory::datastore::{DatastoreError, InMemoryDatastore};
use crate::domain::models::rental::{CarDTO, CarModelDTO, CarRentalDTO};
use crate::ports::outbound::car_rental_repository::{CarRentalReadRepository, ReadError};

/// Read-side repository over [`InMemoryDatastore`].
///
/// Resolves a rental row and joins its car and model rows into the nested
/// DTO. A missing rental is [`ReadError::NotFound`]; a dangling foreign key
/// means the store itself is inconsistent and surfaces as an infrastructure
/// error.
pub struct InMemoryCarRentalRepository {
    store: Arc<InMemoryDatastore>,
}

impl InMemoryCarRentalRepository {
    pub fn new(store: Arc<InMemoryDatastore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CarRentalReadRepository for InMemoryCarRentalRepository {
    async fn read(&self, id: Uuid) -> Result<CarRentalDTO, ReadError> {
        let rental = self
            .store
            .rental(id)
            .map_err(infrastructure)?
            .ok_or(ReadError::NotFound { id })?;

        let car = self
            .store
            .car(rental.car_id)
            .map_err(infrastructure)?
            .ok_or_else(|| {
                infrastructure(DatastoreError::BrokenReference {
                    table: "car_rentals",
                    id,
                    referenced: "cars",
                    missing: rental.car_id,
                })
            })?;

        let model = self
            .store
            .car_model(car.model_id)
            .map_err(infrastructure)?
            .ok_or_else(|| {
                infrastructure(DatastoreError::BrokenReference {
                    table: "cars",
                    id: car.id,
                    referenced: "car_models",
                    missing: car.model_id,
                })
            })?;

        debug!(%id, car_id = %car.id, "resolved car rental");

        Ok(CarRentalDTO {
            id: rental.id,
            customer_id: rental.customer_id,
            car: CarDTO {
                id: car.id,
                model: CarModelDTO {
                    id: model.id,
                    daily_rate: model.daily_rate,
                },
            },
            pickup_date_time: rental.pickup_date_time,
            drop_off_date_time: rental.drop_off_date_time,
            total_price: rental.total_price,
        })
    }
}

fn infrastructure(err: DatastoreError) -> ReadError {
    ReadError::Datastore(anyhow::Error::new(err))
}
