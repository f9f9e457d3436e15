//! Travel Booking - REST backend for package quotes and bookings
//!
//! Prices travel packages (a fixed tier, an accommodation, activities and
//! optional extras) and records bookings together with their activity
//! assignments and an initial payment in a single transaction.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
