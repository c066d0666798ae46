//! # Adapters Layer (Infrastructure)
//!
//! This layer contains the concrete implementations of the [`crate::ports`].
//!
//! ## Architecture
//! In Hexagonal Architecture, Adapters match the "driving" and "driven" sides:
//!
//! * **Inbound** (Driving): Adapters that *drive* the application. The CLI binary plays
//!   this role and lives in its own crate (`rentr-cli`).
//! * **[`outbound`]** (Driven): Adapters that *are driven by* the application (datastore, repositories).
//!
//! ## Rules
//! * Adapters **MUST** depend on `ports` and `domain`.
//! * Adapters **MUST NOT** depend on `application` logic (circular dependency).

pub mod outbound;
