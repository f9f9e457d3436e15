//! Booking, assignment and payment records.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{
    AccommodationId, ActivityId, BookingId, Money, PackageId, Timestamp, UserId,
};

use super::{BookingStatus, PaymentStatus};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Upper bound on a single page of bookings.
pub const MAX_LIST_LIMIT: u32 = 200;

/// Price figures carried from a quote into a booking.
///
/// They are stored as submitted; nothing re-derives `total_price` from the
/// other figures or from a fresh quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: Money,
    pub discount_amount: Money,
    pub additional_cost: Money,
    pub total_price: Money,
}

/// Validated input for the booking transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub user_id: UserId,
    pub package_id: PackageId,
    pub accommodation_id: AccommodationId,
    /// Order preserved, duplicates kept: one assignment per entry.
    pub activity_ids: Vec<ActivityId>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub num_people: i32,
    pub price: PriceBreakdown,
}

/// A persisted booking row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub package_id: PackageId,
    pub accommodation_id: AccommodationId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub num_people: i32,
    pub price: PriceBreakdown,
    pub status: BookingStatus,
    pub created_at: Timestamp,
}

/// Link between a booking and one chosen activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingActivity {
    pub id: i64,
    pub booking_id: BookingId,
    pub activity_id: ActivityId,
    pub activity_date: NaiveDate,
    pub status: BookingStatus,
    pub created_at: Timestamp,
}

/// Amount owed for a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: i64,
    pub booking_id: BookingId,
    pub amount: Money,
    pub status: PaymentStatus,
    pub created_at: Timestamp,
}

/// Result of the booking transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBooking {
    pub booking: Booking,
    pub activities: Vec<BookingActivity>,
}

/// A booking with everything attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub activities: Vec<BookingActivity>,
    pub payment: Option<Payment>,
}

/// Listing criteria; results are newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingListFilter {
    pub status: Option<BookingStatus>,
    pub limit: u32,
    pub offset: u32,
}

impl BookingListFilter {
    /// Builds a filter, applying the default page size and clamping it.
    pub fn new(status: Option<BookingStatus>, limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            status,
            limit: limit.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }
}

impl Default for BookingListFilter {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_filter_defaults() {
        let filter = BookingListFilter::default();
        assert_eq!(filter.limit, 50);
        assert_eq!(filter.offset, 0);
        assert_eq!(filter.status, None);
    }

    #[test]
    fn list_filter_clamps_limit() {
        let filter = BookingListFilter::new(Some(BookingStatus::Pending), Some(10_000), Some(5));
        assert_eq!(filter.limit, MAX_LIST_LIMIT);
        assert_eq!(filter.offset, 5);
    }

    #[test]
    fn price_breakdown_serializes_camel_case() {
        let price = PriceBreakdown {
            base_price: Money::new(249_900),
            discount_amount: Money::new(0),
            additional_cost: Money::new(30_000),
            total_price: Money::new(479_900),
        };
        let json = serde_json::to_value(price).unwrap();
        assert_eq!(json["totalPrice"], 479_900);
        assert_eq!(json["additionalCost"], 30_000);
    }
}
