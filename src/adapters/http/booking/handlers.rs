//! HTTP handlers for booking endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::{
    CreateBookingCommand, GetBookingQuery, ListBookingsQuery, UpdateBookingStatusCommand,
};
use crate::domain::foundation::BookingId;

use super::dto::{
    BookingDetailResponse, BookingListParams, BookingListResponse, BookingStatusResponse,
    CreateBookingRequest, CreateBookingResponse, UpdateStatusRequest,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

fn parse_booking_id(raw: &str) -> Result<BookingId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::not_found("booking_not_found", format!("Booking not found: {}", raw)))
}

/// POST /api/bookings/create
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let cmd = CreateBookingCommand {
        user_id: request.user_id,
        package_id: request.package_id,
        accommodation_id: request.accommodation_id,
        activity_ids: request.activity_ids.unwrap_or_default(),
        check_in_date: request.check_in_date,
        check_out_date: request.check_out_date,
        num_people: request.num_people,
        base_price: request.base_price,
        discount_amount: request.discount_amount,
        additional_cost: request.additional_cost,
        total_price: request.total_price,
    };
    let created = state.create_booking_handler().handle(cmd).await?;

    let response = CreateBookingResponse {
        success: true,
        booking: created.into(),
        message: "Booking created".to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/bookings/:bookingId
pub async fn get_booking(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<BookingDetailResponse>, ApiError> {
    let booking_id = parse_booking_id(&raw_id)?;

    let details = state
        .get_booking_handler()
        .handle(GetBookingQuery { booking_id })
        .await?;

    Ok(Json(BookingDetailResponse {
        success: true,
        booking: details.into(),
    }))
}

/// PUT /api/bookings/:bookingId/status
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<BookingStatusResponse>, ApiError> {
    let booking_id = parse_booking_id(&raw_id)?;
    let Json(request) = payload?;

    let booking = state
        .update_booking_status_handler()
        .handle(UpdateBookingStatusCommand {
            booking_id,
            status: request.status,
        })
        .await?;

    Ok(Json(BookingStatusResponse {
        success: true,
        booking: booking.into(),
        message: "Booking status updated".to_string(),
    }))
}

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    params: Result<Query<BookingListParams>, QueryRejection>,
) -> Result<Json<BookingListResponse>, ApiError> {
    let Query(params) = params?;

    let bookings = state
        .list_bookings_handler()
        .handle(ListBookingsQuery {
            status: params.status,
            limit: params.limit,
            offset: params.offset,
        })
        .await?;

    let bookings: Vec<_> = bookings.into_iter().map(Into::into).collect();
    Ok(Json(BookingListResponse {
        success: true,
        count: bookings.len(),
        bookings,
    }))
}
