//! Route configuration for catalog endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_accommodation, get_activity, list_accommodations, list_activities, list_categories,
};
use crate::adapters::http::state::AppState;

/// Creates the catalog router.
pub fn catalog_router() -> Router<AppState> {
    Router::new()
        .route("/api/accommodations", get(list_accommodations))
        .route("/api/accommodations/:id", get(get_accommodation))
        .route("/api/activities", get(list_activities))
        .route("/api/activities/categories/list", get(list_categories))
        .route("/api/activities/:id", get(get_activity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryBookingRepository, InMemoryCatalog};
    use crate::domain::catalog::{Accommodation, Activity};
    use crate::domain::foundation::{AccommodationId, ActivityId, Money, Timestamp};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn accommodation(id: i64, price: i64) -> Accommodation {
        Accommodation {
            id: AccommodationId::new(id),
            name: format!("Stay {}", id),
            kind: "hotel".to_string(),
            description: None,
            price_per_night: Money::new(price),
            max_guests: 2,
            amenities: vec![],
            image_url: None,
            is_active: true,
            created_at: Timestamp::now(),
        }
    }

    fn activity(id: i64, category: &str) -> Activity {
        Activity {
            id: ActivityId::new(id),
            name: format!("Activity {}", id),
            category: category.to_string(),
            description: None,
            price: Money::new(10_000),
            duration_minutes: 30,
            max_participants: 6,
            location: None,
            image_url: None,
            is_active: true,
            created_at: Timestamp::now(),
        }
    }

    fn app(catalog: InMemoryCatalog) -> Router {
        let state = AppState::new(Arc::new(catalog), Arc::new(InMemoryBookingRepository::new()));
        catalog_router().with_state(state)
    }

    fn seeded() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_accommodation(accommodation(1, 100_000))
            .with_activity(activity(7, "water"))
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn catalog_routes_resolve() {
        for uri in [
            "/api/accommodations",
            "/api/accommodations/1",
            "/api/activities",
            "/api/activities?category=water",
            "/api/activities/7",
            "/api/activities/categories/list",
        ] {
            assert_eq!(status_of(app(seeded()), uri).await, StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        assert_eq!(
            status_of(app(seeded()), "/api/accommodations/99").await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(app(seeded()), "/api/activities/abc").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn store_failure_is_server_error() {
        assert_eq!(
            status_of(app(InMemoryCatalog::unavailable()), "/api/activities").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
