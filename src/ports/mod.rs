//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogReader` - Read-only access to active accommodations and activities
//! - `BookingRepository` - Transactional booking writes and booking reads

mod booking_repository;
mod catalog_reader;

pub use booking_repository::BookingRepository;
pub use catalog_reader::CatalogReader;
