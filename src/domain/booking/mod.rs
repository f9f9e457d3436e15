//! Booking module - Persistent reservations and their lifecycle.
//!
//! A booking is written together with one assignment row per chosen activity
//! and a single pending payment row. After creation only its status changes.

mod aggregate;
mod errors;
mod status;

pub use aggregate::{
    Booking, BookingActivity, BookingDetails, BookingListFilter, CreatedBooking, NewBooking,
    Payment, PriceBreakdown, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
pub use errors::BookingError;
pub use status::{BookingStatus, PaymentStatus};
