//! # Domain Models
//!
//! The core data structures that represent the car-rental domain.
//!
//! ## Core Entities
//! * [`rental::CarRental`]: The primary aggregate, a booked rental with its car and price.
//! * [`car::Car`] / [`car::CarModel`]: The rented vehicle and its catalog model.
//! * [`customer::Customer`]: The renting party; the read side only carries its id.
//!
//! ## Value Objects
//! * [`money::Money`]: A non-negative monetary amount.
//!
//! ## Design Principles
//! * **Rich Models**: Models validate their own invariants at construction time.
//! * **Immutability**: Entities are snapshots; there are no setters.

pub mod car;
pub mod customer;
pub mod money;
pub mod rental;
