//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Accommodations and activities
//! - `package` - Fixed package tiers
//! - `pricing` - Quote calculation
//! - `booking` - Bookings, activity assignments, payments and status lifecycle

pub mod booking;
pub mod catalog;
pub mod foundation;
pub mod package;
pub mod pricing;
