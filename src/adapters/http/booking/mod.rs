//! HTTP adapter for bookings.
//!
//! - `POST /api/bookings/create` - Create a booking with its assignments and payment
//! - `GET /api/bookings/:bookingId` - Booking with assignments and payment
//! - `PUT /api/bookings/:bookingId/status` - Change booking status
//! - `GET /api/bookings?status=&limit=&offset=` - Newest bookings first

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::booking_router;
