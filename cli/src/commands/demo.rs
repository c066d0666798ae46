use std::sync::Arc;

use colored::*;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use rentr_common::clock::{Clock, SystemClock};
use rentr_core::adapters::outbound::memory::car_rental_repo::InMemoryCarRentalRepository;
use rentr_core::adapters::outbound::memory::datastore::{
    CarModelRow, CarRentalRow, CarRow, CustomerRow, InMemoryDatastore,
};
use rentr_core::application::services::rental_lookup::RentalLookupService;
use rentr_core::domain::dates::DateParser;
use rentr_core::domain::models::car::{Car, CarModel};
use rentr_core::domain::models::customer::Customer;
use rentr_core::domain::models::money::Money;
use rentr_core::domain::models::rental::{CarRental, CarRentalDTO};
use rentr_core::domain::pricing;

use crate::terminal::print;

/// Stand-in for the booking workflow: create a consistent rental, persist its
/// rows, then read it back through the repository like any consumer would.
pub async fn demo(json: bool) -> anyhow::Result<()> {
    let reference = SystemClock.now();
    let parser = DateParser::new();
    let store = Arc::new(InMemoryDatastore::new());

    let customer = Customer::new(Uuid::new_v4(), "Ada Lovelace");
    let model = CarModel::new(Uuid::new_v4(), Money::new(Decimal::new(100, 0))?);
    let car = Car::new(Uuid::new_v4(), model.clone());

    let pickup = parser.parse("today", reference)?;
    let drop_off = parser.parse("tomorrow", reference)?;
    let total_price = pricing::price_for(model.daily_rate, pickup, drop_off);
    let rental = CarRental::new(
        Uuid::new_v4(),
        customer.id,
        car.clone(),
        pickup,
        drop_off,
        total_price,
    )?;

    store.insert_customer(CustomerRow {
        id: customer.id,
        full_name: customer.full_name.clone(),
    })?;
    store.insert_car_model(CarModelRow {
        id: model.id,
        daily_rate: model.daily_rate,
    })?;
    store.insert_car(CarRow {
        id: car.id,
        model_id: model.id,
    })?;
    store.insert_rental(CarRentalRow {
        id: rental.id(),
        customer_id: rental.customer_id(),
        car_id: car.id,
        pickup_date_time: rental.pickup(),
        drop_off_date_time: rental.drop_off(),
        total_price: rental.total_price(),
    })?;
    info!(rentals = store.rental_count()?, "seeded in-memory store");

    let repository = InMemoryCarRentalRepository::new(Arc::clone(&store));
    let service = RentalLookupService::new(Box::new(repository));
    let retrieved = service.read(rental.id()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&retrieved)?);
        return Ok(());
    }

    print::header("car rental");
    print_rental_tree(&retrieved);
    Ok(())
}

fn print_rental_tree(rental: &CarRentalDTO) {
    print::tree_head(0, &rental.id.to_string());

    let details: Vec<(String, ColoredString)> = vec![
        ("Customer".to_string(), rental.customer_id.to_string().normal()),
        ("Car".to_string(), rental.car.id.to_string().normal()),
        ("Model".to_string(), rental.car.model.id.to_string().normal()),
        (
            "Daily rate".to_string(),
            rental.car.model.daily_rate.to_string().yellow(),
        ),
        (
            "Pickup".to_string(),
            rental.pickup_date_time.to_rfc3339().cyan(),
        ),
        (
            "Drop-off".to_string(),
            rental.drop_off_date_time.to_rfc3339().cyan(),
        ),
        (
            "Total".to_string(),
            rental.total_price.to_string().bold().green(),
        ),
    ];
    print::as_tree_one_level(details);
}
