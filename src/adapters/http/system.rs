//! Health check and unmatched-route handling.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::domain::foundation::Timestamp;

use super::error::ApiError;
use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub database: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Travel booking API is running",
        timestamp: Timestamp::now().to_string(),
        database: "connected",
    })
}

/// Fallback for every unmatched route.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("route_not_found", "The requested API route does not exist")
}

pub fn system_router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}
