//! Booking repository port.
//!
//! # Design
//!
//! - **Atomic create**: the booking, its activity assignments and its payment
//!   are written in one unit; on any failure none of them is visible.
//! - **Independent reads**: detail lookups are separate queries with no
//!   transaction around them.

use async_trait::async_trait;

use crate::domain::booking::{
    Booking, BookingActivity, BookingListFilter, BookingStatus, CreatedBooking, NewBooking,
    Payment,
};
use crate::domain::foundation::{BookingId, DomainError};

/// Repository port for bookings and the rows attached to them.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a booking with status `pending`, one `pending` assignment per
    /// entry of `activity_ids` (dated on the check-in day), and one `pending`
    /// payment for `total_price`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on any failure, after everything has been rolled back
    async fn create(&self, booking: &NewBooking) -> Result<CreatedBooking, DomainError>;

    /// Find a booking by its ID.
    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, DomainError>;

    /// Activity assignments of a booking, in insertion order.
    async fn find_activities(&self, id: BookingId) -> Result<Vec<BookingActivity>, DomainError>;

    /// Payment of a booking, if one exists.
    async fn find_payment(&self, id: BookingId) -> Result<Option<Payment>, DomainError>;

    /// Bookings newest first, filtered and paginated.
    async fn list(&self, filter: &BookingListFilter) -> Result<Vec<Booking>, DomainError>;

    /// Overwrite the status of a booking.
    ///
    /// Returns `None` if the booking does not exist.
    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DomainError>;

    /// Set the status only while the booking still has status `expected`.
    ///
    /// Returns `None` if the booking does not exist or its status has moved
    /// on; the check and the write are a single atomic step.
    async fn update_status_if(
        &self,
        id: BookingId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DomainError>;
}
