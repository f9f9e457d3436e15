//! HTTP DTOs for booking endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::booking::{
    Booking, BookingActivity, BookingDetails, BookingStatus, CreatedBooking, Payment,
    PaymentStatus,
};
use crate::domain::foundation::{
    AccommodationId, ActivityId, BookingId, Money, PackageId, Timestamp, UserId,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/bookings/create`.
///
/// Everything is optional at this level so that a missing field is reported
/// by validation, in the same envelope as other input errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookingRequest {
    pub user_id: Option<String>,
    pub package_id: Option<String>,
    pub accommodation_id: Option<AccommodationId>,
    pub activity_ids: Option<Vec<ActivityId>>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub num_people: Option<i32>,
    pub base_price: Option<Money>,
    pub discount_amount: Option<Money>,
    pub additional_cost: Option<Money>,
    pub total_price: Option<Money>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// Query string of the booking list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingListParams {
    pub status: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking: CreatedBookingDto,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBookingDto {
    pub booking_id: BookingId,
    pub status: BookingStatus,
    pub package_id: PackageId,
    pub accommodation_id: AccommodationId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub num_people: i32,
    pub total_price: Money,
    pub activities: Vec<AssignedActivityDto>,
    pub created_at: Timestamp,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedActivityDto {
    pub activity_id: ActivityId,
    pub activity_date: NaiveDate,
}

impl From<CreatedBooking> for CreatedBookingDto {
    fn from(created: CreatedBooking) -> Self {
        let booking = created.booking;
        Self {
            booking_id: booking.id,
            status: booking.status,
            package_id: booking.package_id,
            accommodation_id: booking.accommodation_id,
            check_in_date: booking.check_in,
            check_out_date: booking.check_out,
            num_people: booking.num_people,
            total_price: booking.price.total_price,
            activities: created
                .activities
                .into_iter()
                .map(|a| AssignedActivityDto {
                    activity_id: a.activity_id,
                    activity_date: a.activity_date,
                })
                .collect(),
            created_at: booking.created_at,
        }
    }
}

/// A booking row as returned by list, status and detail endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub package_id: PackageId,
    pub accommodation_id: AccommodationId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub num_people: i32,
    pub base_price: Money,
    pub discount_amount: Money,
    pub additional_cost: Money,
    pub total_price: Money,
    pub status: BookingStatus,
    pub created_at: Timestamp,
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.id,
            user_id: booking.user_id,
            package_id: booking.package_id,
            accommodation_id: booking.accommodation_id,
            check_in_date: booking.check_in,
            check_out_date: booking.check_out,
            num_people: booking.num_people,
            base_price: booking.price.base_price,
            discount_amount: booking.price.discount_amount,
            additional_cost: booking.price.additional_cost,
            total_price: booking.price.total_price,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingActivityDto {
    pub id: i64,
    pub booking_id: BookingId,
    pub activity_id: ActivityId,
    pub activity_date: NaiveDate,
    pub status: BookingStatus,
    pub created_at: Timestamp,
}

impl From<BookingActivity> for BookingActivityDto {
    fn from(row: BookingActivity) -> Self {
        Self {
            id: row.id,
            booking_id: row.booking_id,
            activity_id: row.activity_id,
            activity_date: row.activity_date,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: i64,
    pub booking_id: BookingId,
    pub amount: Money,
    pub status: PaymentStatus,
    pub created_at: Timestamp,
}

impl From<Payment> for PaymentDto {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            booking_id: payment.booking_id,
            amount: payment.amount,
            status: payment.status,
            created_at: payment.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingDetailDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub activities: Vec<BookingActivityDto>,
    /// `null` until a payment row exists.
    pub payment: Option<PaymentDto>,
}

impl From<BookingDetails> for BookingDetailDto {
    fn from(details: BookingDetails) -> Self {
        Self {
            booking: details.booking.into(),
            activities: details.activities.into_iter().map(Into::into).collect(),
            payment: details.payment.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingDetailResponse {
    pub success: bool,
    pub booking: BookingDetailDto,
}

#[derive(Debug, Serialize)]
pub struct BookingStatusResponse {
    pub success: bool,
    pub booking: BookingDto,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub success: bool,
    pub bookings: Vec<BookingDto>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::PriceBreakdown;

    fn booking() -> Booking {
        Booking {
            id: BookingId::new(11),
            user_id: UserId::new("user-1").unwrap(),
            package_id: PackageId::new("pkg_1night").unwrap(),
            accommodation_id: AccommodationId::new(2),
            check_in: NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
            num_people: 2,
            price: PriceBreakdown {
                base_price: Money::new(249_900),
                discount_amount: Money::ZERO,
                additional_cost: Money::new(50_000),
                total_price: Money::new(499_900),
            },
            status: BookingStatus::Pending,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreateBookingRequest = serde_json::from_str(r#"{"userId":"u"}"#).unwrap();
        assert_eq!(req.user_id.as_deref(), Some("u"));
        assert!(req.total_price.is_none());
        assert!(req.activity_ids.is_none());
    }

    #[test]
    fn detail_flattens_booking_and_keeps_null_payment() {
        let dto = BookingDetailDto::from(BookingDetails {
            booking: booking(),
            activities: vec![],
            payment: None,
        });
        let json = serde_json::to_value(dto).unwrap();

        assert_eq!(json["bookingId"], 11);
        assert_eq!(json["checkInDate"], "2025-10-03");
        assert_eq!(json["additionalCost"], 50_000);
        assert_eq!(json["status"], "pending");
        assert!(json["payment"].is_null());
    }
}
