//! CreateBookingHandler - Command handler for placing a booking.
//!
//! The submitted price figures are stored as given; no quote is recomputed
//! here.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::booking::{BookingError, CreatedBooking, NewBooking, PriceBreakdown};
use crate::domain::foundation::{
    AccommodationId, ActivityId, Money, PackageId, UserId, ValidationError,
};
use crate::ports::BookingRepository;

/// Command to create a booking, with fields as submitted by the client.
#[derive(Debug, Clone, Default)]
pub struct CreateBookingCommand {
    pub user_id: Option<String>,
    pub package_id: Option<String>,
    pub accommodation_id: Option<AccommodationId>,
    pub activity_ids: Vec<ActivityId>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub num_people: Option<i32>,
    pub base_price: Option<Money>,
    pub discount_amount: Option<Money>,
    pub additional_cost: Option<Money>,
    pub total_price: Option<Money>,
}

impl CreateBookingCommand {
    /// Checks required fields and applies defaults.
    pub fn validate(self) -> Result<NewBooking, ValidationError> {
        let user_id = UserId::new(required(self.user_id, "userId")?)?;
        let package_id = PackageId::new(required(self.package_id, "packageId")?)?;
        let accommodation_id = required(self.accommodation_id, "accommodationId")?;
        let check_in = parse_date(required(self.check_in_date, "checkInDate")?, "checkInDate")?;
        let check_out = parse_date(required(self.check_out_date, "checkOutDate")?, "checkOutDate")?;
        let total_price = required(self.total_price, "totalPrice")?;

        Ok(NewBooking {
            user_id,
            package_id,
            accommodation_id,
            activity_ids: self.activity_ids,
            check_in,
            check_out,
            num_people: self.num_people.unwrap_or(1),
            price: PriceBreakdown {
                base_price: self.base_price.unwrap_or_default(),
                discount_amount: self.discount_amount.unwrap_or_default(),
                additional_cost: self.additional_cost.unwrap_or_default(),
                total_price,
            },
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::empty_field(field))
}

fn parse_date(value: String, field: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| ValidationError::invalid_format(field, format!("expected YYYY-MM-DD: {}", e)))
}

/// Handler for booking creation.
pub struct CreateBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateBookingCommand) -> Result<CreatedBooking, BookingError> {
        let new_booking = cmd.validate()?;
        let created = self.repository.create(&new_booking).await?;

        tracing::info!(
            booking_id = %created.booking.id,
            package_id = %created.booking.package_id,
            activities = created.activities.len(),
            "Booking created"
        );

        Ok(created)
    }
}
