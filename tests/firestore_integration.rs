// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running, with
//! FIRESTORE_EMULATOR_HOST pointing at it.
//!
//! Record IDs are derived from the clock so runs don't see each other's data.

use chrono::TimeZone;
use hotel_access::db::{Fixture, HotelGateway};
use hotel_access::models::{Enrollment, Hotel, Room, Ticket, TicketStatus, TicketType};

mod common;
use common::test_db;

/// Generate a unique base ID for test isolation.
fn unique_base_id() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    // Microseconds: fits Firestore's signed 64-bit integers with room for offsets.
    (SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64)
        / 1000
}

fn make_hotel(id: u64) -> Hotel {
    let at = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
    Hotel {
        id,
        name: format!("Hotel {}", id),
        image: "https://example.com/hotel.jpg".to_string(),
        created_at: at,
        updated_at: at,
    }
}

fn make_room(id: u64, hotel_id: u64) -> Room {
    let at = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    Room {
        id,
        name: format!("Room {}", id),
        capacity: 2,
        hotel_id,
        created_at: at,
        updated_at: at,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TICKET CONTEXT
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_ticket_context_resolves_first_links() {
    require_emulator!();

    let db = test_db().await;
    let base = unique_base_id();
    let user_id = base;

    let fixture = Fixture {
        enrollments: vec![
            Enrollment { id: base + 2, user_id },
            Enrollment { id: base + 1, user_id },
        ],
        tickets: vec![
            Ticket {
                id: base + 11,
                enrollment_id: base + 1,
                ticket_type_id: base + 21,
                status: TicketStatus::Paid,
            },
            Ticket {
                id: base + 12,
                enrollment_id: base + 1,
                ticket_type_id: base + 22,
                status: TicketStatus::Reserved,
            },
        ],
        ticket_types: vec![
            TicketType {
                id: base + 21,
                name: "Presencial + Hotel".to_string(),
                is_remote: false,
                includes_hotel: true,
            },
            TicketType {
                id: base + 22,
                name: "Online".to_string(),
                is_remote: true,
                includes_hotel: false,
            },
        ],
        ..Default::default()
    };
    db.seed(&fixture).await.unwrap();

    let context = db
        .ticket_context_for_user(user_id)
        .await
        .unwrap()
        .expect("context should resolve");

    assert_eq!(context.enrollment.id, base + 1);
    assert_eq!(context.ticket.id, base + 11);
    assert_eq!(context.ticket_type.id, base + 21);
}

#[tokio::test]
async fn test_ticket_context_absent_without_enrollment() {
    require_emulator!();

    let db = test_db().await;
    let user_id = unique_base_id();

    let context = db.ticket_context_for_user(user_id).await.unwrap();
    assert!(context.is_none());
}

#[tokio::test]
async fn test_ticket_context_absent_with_dangling_ticket_type() {
    require_emulator!();

    let db = test_db().await;
    let base = unique_base_id();

    let fixture = Fixture {
        enrollments: vec![Enrollment {
            id: base,
            user_id: base,
        }],
        tickets: vec![Ticket {
            id: base,
            enrollment_id: base,
            ticket_type_id: base,
            status: TicketStatus::Paid,
        }],
        ..Default::default()
    };
    db.seed(&fixture).await.unwrap();

    let context = db.ticket_context_for_user(base).await.unwrap();
    assert!(context.is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// HOTELS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_hotel_with_rooms_roundtrip() {
    require_emulator!();

    let db = test_db().await;
    let base = unique_base_id();

    let fixture = Fixture {
        hotels: vec![make_hotel(base)],
        rooms: vec![make_room(base + 2, base), make_room(base + 1, base)],
        ..Default::default()
    };
    db.seed(&fixture).await.unwrap();

    let detail = db
        .hotel_with_rooms(base)
        .await
        .unwrap()
        .expect("hotel should exist");

    assert_eq!(detail.hotel, make_hotel(base));
    assert_eq!(
        detail.rooms,
        vec![make_room(base + 1, base), make_room(base + 2, base)]
    );

    let missing = db.hotel_with_rooms(base + 100).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_list_hotels_ascending() {
    require_emulator!();

    let db = test_db().await;
    let base = unique_base_id();

    let fixture = Fixture {
        hotels: vec![make_hotel(base + 1), make_hotel(base)],
        ..Default::default()
    };
    db.seed(&fixture).await.unwrap();

    let hotels = db.list_hotels().await.unwrap();
    let ids: Vec<u64> = hotels.iter().map(|h| h.id).collect();

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert!(ids.contains(&base) && ids.contains(&(base + 1)));
}
