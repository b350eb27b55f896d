// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use hotel_access::config::Config;
use hotel_access::db::{FirestoreDb, HotelGateway, MemoryDb};
use hotel_access::middleware::auth::create_jwt;
use hotel_access::routes::create_router;
use hotel_access::services::HotelService;
use hotel_access::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// User holding a paid, in-person ticket with hotel.
#[allow(dead_code)]
pub const ELIGIBLE_USER: u64 = 1;
/// User with a paid ticket for remote attendance.
#[allow(dead_code)]
pub const REMOTE_USER: u64 = 2;
/// User enrolled but without any ticket.
#[allow(dead_code)]
pub const NO_TICKET_USER: u64 = 3;
/// User with a reserved (unpaid) in-person ticket.
#[allow(dead_code)]
pub const UNPAID_USER: u64 = 4;
/// User that never enrolled.
#[allow(dead_code)]
pub const UNENROLLED_USER: u64 = 99;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Enrollments and tickets for each of the test users above, with the given
/// hotels and rooms.
#[allow(dead_code)]
pub fn fixture_with(hotels: Value, rooms: Value) -> Value {
    json!({
        "enrollments": [
            { "id": 1, "user_id": ELIGIBLE_USER },
            { "id": 2, "user_id": REMOTE_USER },
            { "id": 3, "user_id": NO_TICKET_USER },
            { "id": 4, "user_id": UNPAID_USER }
        ],
        "tickets": [
            { "id": 1, "enrollment_id": 1, "ticket_type_id": 1, "status": "PAID" },
            { "id": 2, "enrollment_id": 2, "ticket_type_id": 2, "status": "PAID" },
            { "id": 3, "enrollment_id": 4, "ticket_type_id": 1, "status": "RESERVED" }
        ],
        "ticket_types": [
            { "id": 1, "name": "Presencial + Hotel", "is_remote": false, "includes_hotel": true },
            { "id": 2, "name": "Online", "is_remote": true, "includes_hotel": false }
        ],
        "hotels": hotels,
        "rooms": rooms
    })
}

/// One hotel (id 1) with one room (id 1).
#[allow(dead_code)]
pub fn one_hotel_fixture() -> Value {
    fixture_with(
        json!([{
            "id": 1,
            "name": "Driven Resort",
            "image": "https://example.com/resort.jpg",
            "created_at": "2024-01-15T10:00:00Z",
            "updated_at": "2024-01-16T11:30:00Z"
        }]),
        json!([{
            "id": 1,
            "name": "101",
            "capacity": 3,
            "hotel_id": 1,
            "created_at": "2024-03-01T09:00:00Z",
            "updated_at": "2024-03-02T09:00:00Z"
        }]),
    )
}

/// Create a test app backed by the in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(fixture: Value) -> (axum::Router, Arc<AppState>) {
    let db = MemoryDb::load_from_json(&fixture.to_string()).expect("valid fixture");
    create_test_app_with(Arc::new(db))
}

/// Create a test app whose database is offline.
#[allow(dead_code)]
pub fn create_offline_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(Arc::new(FirestoreDb::new_mock()))
}

#[allow(dead_code)]
fn create_test_app_with(gateway: Arc<dyn HotelGateway>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        hotel_service: HotelService::new(gateway),
    });

    (create_router(state.clone()), state)
}

/// Create a test JWT token.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: u64, signing_key: &[u8]) -> String {
    create_jwt(user_id, signing_key).expect("Failed to create JWT")
}

/// Send an authenticated GET as `user_id`.
#[allow(dead_code)]
pub async fn get_as(
    app: axum::Router,
    state: &AppState,
    user_id: u64,
    uri: &str,
) -> Response<Body> {
    let token = create_test_jwt(user_id, &state.config.jwt_signing_key);

    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
