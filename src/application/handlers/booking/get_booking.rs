//! GetBookingHandler - Query handler for a booking with its assignments and payment.

use std::sync::Arc;

use crate::domain::booking::{BookingDetails, BookingError};
use crate::domain::foundation::BookingId;
use crate::ports::BookingRepository;

#[derive(Debug, Clone, Copy)]
pub struct GetBookingQuery {
    pub booking_id: BookingId,
}

pub struct GetBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl GetBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetBookingQuery) -> Result<BookingDetails, BookingError> {
        let booking = self
            .repository
            .find_by_id(query.booking_id)
            .await?
            .ok_or_else(|| BookingError::not_found(query.booking_id))?;

        let activities = self.repository.find_activities(query.booking_id).await?;
        let payment = self.repository.find_payment(query.booking_id).await?;

        Ok(BookingDetails {
            booking,
            activities,
            payment,
        })
    }
}
