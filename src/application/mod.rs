//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create booking, change status) are kept apart from the
//! read-only query handlers.

pub mod handlers;

pub use handlers::*;
