//! HTTP handlers for catalog endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::application::{GetAccommodationQuery, GetActivityQuery, ListActivitiesQuery};
use crate::domain::foundation::{AccommodationId, ActivityId};

use super::dto::{
    AccommodationListResponse, AccommodationResponse, ActivityListParams, ActivityListResponse,
    ActivityResponse, CategoriesResponse,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// GET /api/accommodations
pub async fn list_accommodations(
    State(state): State<AppState>,
) -> Result<Json<AccommodationListResponse>, ApiError> {
    let accommodations = state
        .list_accommodations_handler()
        .handle()
        .await
        .map_err(|e| {
            ApiError::from_catalog(e, "accommodations_fetch_failed", "Failed to load accommodations")
        })?;

    Ok(Json(accommodations.into()))
}

/// GET /api/accommodations/:id
pub async fn get_accommodation(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<AccommodationResponse>, ApiError> {
    // A malformed id cannot name any row.
    let accommodation_id: AccommodationId = raw_id.parse().map_err(|_| {
        ApiError::not_found(
            "accommodation_not_found",
            format!("Accommodation not found: {}", raw_id),
        )
    })?;

    let accommodation = state
        .get_accommodation_handler()
        .handle(GetAccommodationQuery { accommodation_id })
        .await
        .map_err(|e| {
            ApiError::from_catalog(e, "accommodation_fetch_failed", "Failed to load accommodation")
        })?;

    Ok(Json(AccommodationResponse {
        success: true,
        accommodation,
    }))
}

/// GET /api/activities?category=
pub async fn list_activities(
    State(state): State<AppState>,
    params: Result<Query<ActivityListParams>, QueryRejection>,
) -> Result<Json<ActivityListResponse>, ApiError> {
    let Query(params) = params?;

    let activities = state
        .list_activities_handler()
        .handle(ListActivitiesQuery {
            category: params.category,
        })
        .await
        .map_err(|e| ApiError::from_catalog(e, "activities_fetch_failed", "Failed to load activities"))?;

    Ok(Json(activities.into()))
}

/// GET /api/activities/:id
pub async fn get_activity(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ActivityResponse>, ApiError> {
    let activity_id: ActivityId = raw_id.parse().map_err(|_| {
        ApiError::not_found("activity_not_found", format!("Activity not found: {}", raw_id))
    })?;

    let activity = state
        .get_activity_handler()
        .handle(GetActivityQuery { activity_id })
        .await
        .map_err(|e| ApiError::from_catalog(e, "activity_fetch_failed", "Failed to load activity"))?;

    Ok(Json(ActivityResponse {
        success: true,
        activity,
    }))
}

/// GET /api/activities/categories/list
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .list_categories_handler()
        .handle()
        .await
        .map_err(|e| {
            ApiError::from_catalog(e, "categories_fetch_failed", "Failed to load categories")
        })?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}
