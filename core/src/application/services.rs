//! # Application Services
//!
//! The "Use Cases" of the application.
//!
//! * **Orchestration**: They coordinate the Domain layer (pure logic) and the Ports (infrastructure).
//! * **Agnostic**: They do not know *how* a rental is stored or *what* the wall clock says,
//!   only that a repository and a clock were handed to them at construction.
//!
//! Dependencies arrive through constructors (`Box<dyn Port>`, `Arc<dyn Clock>`),
//! never through a global registry.
//!
//! ## Available Services
//! * [`rental_lookup::RentalLookupService`]: Resolves a rental id to its DTO.
//! * [`booking_quote::BookingQuoteService`]: Prices a prospective rental from relative date expressions.

pub mod booking_quote;
pub mod rental_lookup;
