//! Route configuration for booking endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{create_booking, get_booking, list_bookings, update_booking_status};
use crate::adapters::http::state::AppState;

/// Creates the booking router.
///
/// `/api/bookings/create` is a literal segment and takes precedence over
/// `/api/bookings/:bookingId`.
pub fn booking_router() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", get(list_bookings))
        .route("/api/bookings/create", post(create_booking))
        .route("/api/bookings/:booking_id", get(get_booking))
        .route("/api/bookings/:booking_id/status", put(update_booking_status))
}
