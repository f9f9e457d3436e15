//! HTTP handlers for quote endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::application::CalculateQuoteCommand;

use super::dto::{CalculateQuoteRequest, PackagesResponse, QuoteResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// GET /api/quotes/packages
pub async fn list_packages(State(state): State<AppState>) -> Json<PackagesResponse> {
    Json(PackagesResponse {
        success: true,
        packages: state.list_packages_handler().handle(),
    })
}

/// POST /api/quotes/calculate
pub async fn calculate_quote(
    State(state): State<AppState>,
    payload: Result<Json<CalculateQuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(request) = payload?;

    let cmd = CalculateQuoteCommand {
        package_id: request.package_id,
        accommodation_id: request.accommodation_id,
        activity_ids: request.activity_ids,
        num_people: request.num_people,
        options: request.options,
    };
    let quote = state.calculate_quote_handler().handle(cmd).await?;

    Ok(Json(QuoteResponse {
        success: true,
        quote: quote.into(),
        message: "Quote calculated".to_string(),
    }))
}
