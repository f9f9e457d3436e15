//! Catalog module - Accommodations and activities offered for booking.
//!
//! Catalog rows are owned by the store and only ever read by this service.
//! Every lookup exposed through the catalog port is restricted to active rows.

mod accommodation;
mod activity;
mod errors;

pub use accommodation::Accommodation;
pub use activity::Activity;
pub use errors::CatalogError;
