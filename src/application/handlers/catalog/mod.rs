//! Catalog query handlers.

mod accommodations;
mod activities;

pub use accommodations::{
    GetAccommodationHandler, GetAccommodationQuery, ListAccommodationsHandler,
};
pub use activities::{
    GetActivityHandler, GetActivityQuery, ListActivitiesHandler, ListActivitiesQuery,
    ListCategoriesHandler,
};
