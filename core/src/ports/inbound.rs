//! # Inbound Ports (Driving Actors)
//!
//! Contracts for interactions *initiated by external actors* towards the
//! application (driving the app).
//!
//! ## Current State
//! The CLI adapter instantiates and calls the `application` services
//! directly, so no inbound traits are defined yet. This is acceptable while
//! the only driver is a user at a terminal.
//!
//! If a second driver appears (e.g., a REST API), lift the service calls into
//! traits here, along the lines of:
//!
//! ```rust
//! use rentr_core::domain::models::rental::CarRentalDTO;
//! use rentr_core::ports::outbound::car_rental_repository::ReadError;
//! use uuid::Uuid;
//!
//! #[async_trait::async_trait]
//! pub trait RentalLookupUseCase {
//!     async fn read(&self, id: Uuid) -> Result<CarRentalDTO, ReadError>;
//! }
//! ```
