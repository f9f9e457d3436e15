//! HTTP adapters - REST API implementations.
//!
//! Each area (catalog, quotes, bookings) has its own router; `build_router`
//! merges them under one shared `AppState`.

pub mod booking;
pub mod catalog;
pub mod error;
pub mod quote;
pub mod router;
pub mod state;
pub mod system;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
