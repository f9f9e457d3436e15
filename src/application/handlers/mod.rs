//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! catalog and booking ports.

pub mod booking;
pub mod catalog;
pub mod quote;

pub use booking::{
    CreateBookingCommand, CreateBookingHandler, GetBookingHandler, GetBookingQuery,
    ListBookingsHandler, ListBookingsQuery, UpdateBookingStatusCommand,
    UpdateBookingStatusHandler,
};
pub use catalog::{
    GetAccommodationHandler, GetAccommodationQuery, GetActivityHandler, GetActivityQuery,
    ListAccommodationsHandler, ListActivitiesHandler, ListActivitiesQuery, ListCategoriesHandler,
};
pub use quote::{CalculateQuoteCommand, CalculateQuoteHandler, ListPackagesHandler};
