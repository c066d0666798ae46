//! Factory helpers that insert fully-formed entities for test setup.
//!
//! Each factory fills unspecified fields with sensible defaults (random
//! UUIDs, a 100/day rate, a one-day rental priced by the pricing policy),
//! inserts the rows, and hands back the domain entity.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use rentr_core::adapters::outbound::memory::datastore::{
    CarModelRow, CarRentalRow, CarRow, CustomerRow, InMemoryDatastore,
};
use rentr_core::domain::models::car::{Car, CarModel};
use rentr_core::domain::models::customer::Customer;
use rentr_core::domain::models::money::Money;
use rentr_core::domain::models::rental::CarRental;
use rentr_core::domain::pricing;

fn default_rate() -> Money {
    Money::new(Decimal::new(100, 0)).expect("default rate is non-negative")
}

#[derive(Default)]
pub struct CustomerFactory {
    id: Option<Uuid>,
    full_name: Option<String>,
}

impl CustomerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn create(self, store: &InMemoryDatastore) -> anyhow::Result<Customer> {
        let customer = Customer::new(
            self.id.unwrap_or_else(Uuid::new_v4),
            self.full_name
                .unwrap_or_else(|| "Grace Hopper".to_string()),
        );
        store.insert_customer(CustomerRow {
            id: customer.id,
            full_name: customer.full_name.clone(),
        })?;
        Ok(customer)
    }
}

#[derive(Default)]
pub struct CarModelFactory {
    id: Option<Uuid>,
    daily_rate: Option<Money>,
}

impl CarModelFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_daily_rate(mut self, daily_rate: Money) -> Self {
        self.daily_rate = Some(daily_rate);
        self
    }

    pub fn create(self, store: &InMemoryDatastore) -> anyhow::Result<CarModel> {
        let model = CarModel::new(
            self.id.unwrap_or_else(Uuid::new_v4),
            self.daily_rate.unwrap_or_else(default_rate),
        );
        store.insert_car_model(CarModelRow {
            id: model.id,
            daily_rate: model.daily_rate,
        })?;
        Ok(model)
    }
}

#[derive(Default)]
pub struct CarFactory {
    id: Option<Uuid>,
    model: Option<CarModel>,
}

impl CarFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Use an already-seeded model instead of creating a fresh one.
    pub fn with_model(mut self, model: CarModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn create(self, store: &InMemoryDatastore) -> anyhow::Result<Car> {
        let model = match self.model {
            Some(model) => model,
            None => CarModelFactory::new().create(store)?,
        };
        let car = Car::new(self.id.unwrap_or_else(Uuid::new_v4), model);
        store.insert_car(CarRow {
            id: car.id,
            model_id: car.model.id,
        })?;
        Ok(car)
    }
}

#[derive(Default)]
pub struct CarRentalFactory {
    id: Option<Uuid>,
    customer: Option<Customer>,
    car: Option<Car>,
    pickup: Option<DateTime<Utc>>,
    drop_off: Option<DateTime<Utc>>,
    total_price: Option<Money>,
}

impl CarRentalFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_car(mut self, car: Car) -> Self {
        self.car = Some(car);
        self
    }

    pub fn with_pickup(mut self, pickup: DateTime<Utc>) -> Self {
        self.pickup = Some(pickup);
        self
    }

    pub fn with_drop_off(mut self, drop_off: DateTime<Utc>) -> Self {
        self.drop_off = Some(drop_off);
        self
    }

    pub fn with_total_price(mut self, total_price: Money) -> Self {
        self.total_price = Some(total_price);
        self
    }

    pub fn create(self, store: &InMemoryDatastore) -> anyhow::Result<CarRental> {
        let customer = match self.customer {
            Some(customer) => customer,
            None => CustomerFactory::new().create(store)?,
        };
        let car = match self.car {
            Some(car) => car,
            None => CarFactory::new().create(store)?,
        };
        let pickup = self.pickup.unwrap_or_else(Utc::now);
        let drop_off = self.drop_off.unwrap_or_else(|| pickup + Duration::days(1));
        let total_price = self
            .total_price
            .unwrap_or_else(|| pricing::price_for(car.model.daily_rate, pickup, drop_off));

        let rental = CarRental::new(
            self.id.unwrap_or_else(Uuid::new_v4),
            customer.id,
            car,
            pickup,
            drop_off,
            total_price,
        )?;
        store.insert_rental(CarRentalRow {
            id: rental.id(),
            customer_id: rental.customer_id(),
            car_id: rental.car().id,
            pickup_date_time: rental.pickup(),
            drop_off_date_time: rental.drop_off(),
            total_price: rental.total_price(),
        })?;
        Ok(rental)
    }
}
