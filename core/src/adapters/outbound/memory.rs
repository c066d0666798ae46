//! In-memory rendition of the relational datastore boundary.
//!
//! Real deployments would put a SQL-backed adapter here; the in-memory store
//! keeps the same relational shape (one table per entity, flat rows with
//! foreign-key ids, point lookup by primary key, full reset) without dragging
//! a database server into the picture.

pub mod car_rental_repo;
pub mod datastore;
