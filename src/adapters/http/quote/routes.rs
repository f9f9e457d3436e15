//! Route configuration for quote endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{calculate_quote, list_packages};
use crate::adapters::http::state::AppState;

/// Creates the quote router.
pub fn quote_router() -> Router<AppState> {
    Router::new()
        .route("/api/quotes/packages", get(list_packages))
        .route("/api/quotes/calculate", post(calculate_quote))
}
