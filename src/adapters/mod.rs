//! Adapters - Implementations of ports for external systems.

pub mod http;
pub mod memory;
pub mod postgres;
