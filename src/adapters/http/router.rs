//! Assembles the full HTTP application.

use std::time::Duration;

use axum::http::{HeaderValue, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::booking::booking_router;
use super::error::ApiError;
use super::catalog::catalog_router;
use super::quote::quote_router;
use super::state::AppState;
use super::system::{route_not_found, system_router};

/// Builds the router with every endpoint, the 404 fallback and the
/// CORS, timeout and (optionally) tracing layers.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let enable_tracing = state.features.enable_tracing;

    let router = Router::new()
        .merge(system_router())
        .merge(catalog_router())
        .merge(quote_router())
        .merge(booking_router())
        .fallback(route_not_found)
        .with_state(state);
    let router = with_timeout(router, server.request_timeout())
        .layer(cors_layer(&server.cors_origins_list()));

    if enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Applies the request timeout; a timed-out request answers with the error
/// envelope rather than an empty 408.
fn with_timeout(router: Router, timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::map_response(envelope_timeout))
}

async fn envelope_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        ApiError::RequestTimeout.into_response()
    } else {
        response
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
