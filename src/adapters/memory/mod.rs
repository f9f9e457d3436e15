//! In-memory adapters.
//!
//! Implement the ports with the same filtering, ordering and atomicity rules
//! as the PostgreSQL adapters. Used by tests and for running without a store.

mod booking_repository;
mod catalog;

pub use booking_repository::{FailurePoint, InMemoryBookingRepository};
pub use catalog::InMemoryCatalog;
