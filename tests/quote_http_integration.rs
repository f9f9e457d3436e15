//! Integration tests for quote and catalog HTTP endpoints.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use travel_booking::adapters::http::{build_router, AppState};
use travel_booking::adapters::memory::{InMemoryBookingRepository, InMemoryCatalog};
use travel_booking::config::ServerConfig;
use travel_booking::domain::catalog::{Accommodation, Activity};
use travel_booking::domain::foundation::{AccommodationId, ActivityId, Money, Timestamp};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn accommodation(id: i64, price: i64, active: bool) -> Accommodation {
    Accommodation {
        id: AccommodationId::new(id),
        name: format!("Seaside Stay {}", id),
        kind: "hotel".to_string(),
        description: Some("Ocean view".to_string()),
        price_per_night: Money::new(price),
        max_guests: 4,
        amenities: vec!["wifi".to_string(), "parking".to_string()],
        image_url: None,
        is_active: active,
        created_at: Timestamp::now(),
    }
}

fn activity(id: i64, category: &str, price: i64, active: bool) -> Activity {
    Activity {
        id: ActivityId::new(id),
        name: format!("Activity {}", id),
        category: category.to_string(),
        description: None,
        price: Money::new(price),
        duration_minutes: 120,
        max_participants: 12,
        location: Some("Marina".to_string()),
        image_url: None,
        is_active: active,
        created_at: Timestamp::now(),
    }
}

fn app() -> Router {
    let catalog = InMemoryCatalog::new()
        .with_accommodation(accommodation(1, 100_000, true))
        .with_accommodation(accommodation(2, 60_000, true))
        .with_accommodation(accommodation(3, 10_000, false))
        .with_activity(activity(10, "water", 40_000, true))
        .with_activity(activity(11, "land", 25_000, true))
        .with_activity(activity(12, "water", 90_000, false));
    let state = AppState::new(Arc::new(catalog), Arc::new(InMemoryBookingRepository::new()));
    build_router(state, &ServerConfig::default())
}

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_to(app(), method, uri, body).await
}

async fn send_to(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = router.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn quote(body: Value) -> (StatusCode, Value) {
    send(Method::POST, "/api/quotes/calculate", Some(body)).await
}

// =============================================================================
// Quotes
// =============================================================================

#[tokio::test]
async fn one_night_for_two_without_extras() {
    let (status, json) = quote(json!({
        "packageId": "pkg_1night",
        "accommodationId": 1,
        "numPeople": 2
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let quote = &json["quote"];
    assert_eq!(quote["package"]["id"], "pkg_1night");
    assert_eq!(quote["accommodation"]["total"], 200_000);
    assert_eq!(quote["pricing"]["subtotal"], 449_900);
    assert_eq!(quote["pricing"]["discountAmount"], 0);
    assert_eq!(quote["pricing"]["totalPrice"], 449_900);
    assert_eq!(quote["numPeople"], 2);
}

#[tokio::test]
async fn inactive_and_unknown_activities_are_left_out() {
    let (status, json) = quote(json!({
        "packageId": "pkg_1night",
        "accommodationId": 2,
        "activityIds": [10, 12, 404],
        "numPeople": 1
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let activities = json["quote"]["activities"].as_array().unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0]["id"], 10);
    assert_eq!(json["quote"]["pricing"]["activitiesCost"], 40_000);
}

#[tokio::test]
async fn extras_and_early_booking_discount() {
    let (_, json) = quote(json!({
        "packageId": "pkg_2night",
        "accommodationId": 2,
        "activityIds": [11],
        "numPeople": 2,
        "options": {"pickup": true, "guide": true, "insurance": true, "earlyBooking": true}
    }))
    .await;

    let pricing = &json["quote"]["pricing"];
    // 449900 + 60000*2*2 + 25000*2 + 30000 + 50000 + 20000*2
    assert_eq!(pricing["subtotal"], 859_900);
    assert_eq!(pricing["additionalCost"], 120_000);
    assert_eq!(pricing["discountRate"], 0.1);
    assert_eq!(pricing["discountReason"], "early booking discount");
    assert_eq!(pricing["discountAmount"], 85_990);
    assert_eq!(pricing["totalPrice"], 773_910);

    let options = &json["quote"]["options"];
    assert_eq!(options["insurance"], json!({"included": true, "cost": 40000}));
}

#[tokio::test]
async fn group_discount_overrides_early_booking() {
    let (_, json) = quote(json!({
        "packageId": "pkg_1night",
        "accommodationId": 1,
        "numPeople": 4,
        "options": {"earlyBooking": true}
    }))
    .await;

    let pricing = &json["quote"]["pricing"];
    assert_eq!(pricing["discountRate"], 0.15);
    assert_eq!(pricing["discountReason"], "group discount (4+ people)");
    // floor(649900 * 0.15) = 97485
    assert_eq!(pricing["subtotal"], 649_900);
    assert_eq!(pricing["discountAmount"], 97_485);
    assert_eq!(pricing["totalPrice"], 552_415);
}

#[tokio::test]
async fn quote_errors_use_envelope() {
    let (status, json) = quote(json!({"packageId": "pkg_7night", "accommodationId": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_package");

    let (status, json) = quote(json!({"packageId": "pkg_1night", "accommodationId": 3})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "accommodation_not_found");

    let (status, json) = quote(json!({
        "packageId": "pkg_1night",
        "accommodationId": 1,
        "numPeople": 0
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_input");
}

#[tokio::test]
async fn package_is_checked_before_accommodation() {
    let (status, json) = quote(json!({"packageId": "pkg_bad"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_package");

    let (status, json) = quote(json!({"packageId": "pkg_bad", "accommodationId": 999})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_package");

    for body in [
        json!({"packageId": "pkg_1night"}),
        json!({"packageId": "pkg_1night", "accommodationId": null}),
        json!({"packageId": "pkg_1night", "accommodationId": 999}),
    ] {
        let (status, json) = quote(body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(json["error"], "accommodation_not_found", "{}", body);
    }
}

#[tokio::test]
async fn quote_total_beyond_supported_amount_is_invalid_input() {
    let catalog =
        InMemoryCatalog::new().with_accommodation(accommodation(9, 1_000_000_000, true));
    let state = AppState::new(Arc::new(catalog), Arc::new(InMemoryBookingRepository::new()));
    let router = build_router(state, &ServerConfig::default());
    let body = json!({
        "packageId": "pkg_3night",
        "accommodationId": 9,
        "numPeople": u32::MAX
    });

    let (status, json) = send_to(router, Method::POST, "/api/quotes/calculate", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_input");
}

#[tokio::test]
async fn party_size_beyond_u32_is_invalid_input() {
    let (status, json) = quote(json!({
        "packageId": "pkg_1night",
        "accommodationId": 1,
        "numPeople": 4_294_967_296u64
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_input");
}

#[tokio::test]
async fn packages_list_in_registry_order() {
    let (status, json) = send(Method::GET, "/api/quotes/packages", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json["packages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["pkg_1night", "pkg_2night", "pkg_3night"]);
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn accommodations_are_active_and_cheapest_first() {
    let (status, json) = send(Method::GET, "/api/accommodations", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["accommodations"][0]["id"], 2);
    assert_eq!(json["accommodations"][0]["type"], "hotel");
    assert_eq!(json["accommodations"][0]["pricePerNight"], 60_000);
}

#[tokio::test]
async fn inactive_accommodation_detail_is_not_found() {
    let (status, json) = send(Method::GET, "/api/accommodations/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "accommodation_not_found");
}

#[tokio::test]
async fn activities_filter_and_categories() {
    let (_, json) = send(Method::GET, "/api/activities?category=water", None).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["activities"][0]["id"], 10);

    let (_, json) = send(Method::GET, "/api/activities/categories/list", None).await;
    assert_eq!(json["categories"], json!(["land", "water"]));

    let (status, json) = send(Method::GET, "/api/activities/12", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "activity_not_found");
}
