//! # Outbound Ports (Driven Actors)
//!
//! This module defines the contracts (traits) for interactions *initiated by the application*
//! towards the external world (Infrastructure).
//!
//! ## What belongs here?
//! * **Repositories**: Interfaces for data access (datastore lookups).
//!
//! ## Rules
//! 1. All items here must be `traits` (plus their error types).
//! 2. No concrete implementations allowed.
//! 3. Using `domain` models in method signatures is allowed and encouraged.
//! 4. These traits are implemented in `adapters/outbound`.

pub mod car_rental_repository;
