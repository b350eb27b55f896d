// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process snapshot backend, loaded from a JSON fixture.

use crate::db::{DbError, Fixture, HotelGateway};
use crate::models::{Enrollment, Hotel, HotelWithRooms, Room, Ticket, TicketContext, TicketType};
use async_trait::async_trait;
use dashmap::DashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Records held in memory, keyed by ID.
#[derive(Clone, Default)]
pub struct MemoryDb {
    enrollments: Arc<DashMap<u64, Enrollment>>,
    tickets: Arc<DashMap<u64, Ticket>>,
    ticket_types: Arc<DashMap<u64, TicketType>>,
    hotels: Arc<DashMap<u64, Hotel>>,
    rooms: Arc<DashMap<u64, Room>>,
}

impl MemoryDb {
    /// Load a fixture from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let json_data = fs::read_to_string(path.as_ref()).map_err(|e| {
            DbError::Fixture(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::load_from_json(&json_data)
    }

    /// Load a fixture from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, DbError> {
        let fixture: Fixture =
            serde_json::from_str(json_data).map_err(|e| DbError::Fixture(e.to_string()))?;
        Self::from_fixture(fixture)
    }

    /// Build a snapshot from fixture records. Duplicate IDs are rejected.
    pub fn from_fixture(fixture: Fixture) -> Result<Self, DbError> {
        let db = Self::default();

        insert_unique(&db.enrollments, "enrollment", fixture.enrollments, |e| e.id)?;
        insert_unique(&db.tickets, "ticket", fixture.tickets, |t| t.id)?;
        insert_unique(&db.ticket_types, "ticket type", fixture.ticket_types, |t| t.id)?;
        insert_unique(&db.hotels, "hotel", fixture.hotels, |h| h.id)?;
        insert_unique(&db.rooms, "room", fixture.rooms, |r| r.id)?;

        tracing::info!(
            enrollments = db.enrollments.len(),
            tickets = db.tickets.len(),
            hotels = db.hotels.len(),
            rooms = db.rooms.len(),
            "Loaded in-memory fixture"
        );
        Ok(db)
    }
}

fn insert_unique<T>(
    map: &DashMap<u64, T>,
    kind: &str,
    records: Vec<T>,
    id_of: impl Fn(&T) -> u64,
) -> Result<(), DbError> {
    for record in records {
        let id = id_of(&record);
        if map.insert(id, record).is_some() {
            return Err(DbError::Fixture(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}

/// Lowest-ID record matching `pred`.
fn first_by_id<T: Clone>(map: &DashMap<u64, T>, pred: impl Fn(&T) -> bool) -> Option<T> {
    map.iter()
        .filter(|entry| pred(entry.value()))
        .min_by_key(|entry| *entry.key())
        .map(|entry| entry.value().clone())
}

/// All records matching `pred`, ascending by ID.
fn sorted_by_id<T: Clone>(map: &DashMap<u64, T>, pred: impl Fn(&T) -> bool) -> Vec<T> {
    let mut found: Vec<(u64, T)> = map
        .iter()
        .filter(|entry| pred(entry.value()))
        .map(|entry| (*entry.key(), entry.value().clone()))
        .collect();
    found.sort_by_key(|(id, _)| *id);
    found.into_iter().map(|(_, record)| record).collect()
}

#[async_trait]
impl HotelGateway for MemoryDb {
    async fn ticket_context_for_user(
        &self,
        user_id: u64,
    ) -> Result<Option<TicketContext>, DbError> {
        let Some(enrollment) = first_by_id(&self.enrollments, |e| e.user_id == user_id) else {
            return Ok(None);
        };
        let Some(ticket) = first_by_id(&self.tickets, |t| t.enrollment_id == enrollment.id) else {
            return Ok(None);
        };
        let Some(ticket_type) = self
            .ticket_types
            .get(&ticket.ticket_type_id)
            .map(|t| t.value().clone())
        else {
            return Ok(None);
        };

        Ok(Some(TicketContext {
            enrollment,
            ticket,
            ticket_type,
        }))
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>, DbError> {
        Ok(sorted_by_id(&self.hotels, |_| true))
    }

    async fn hotel_with_rooms(&self, hotel_id: u64) -> Result<Option<HotelWithRooms>, DbError> {
        let Some(hotel) = self.hotels.get(&hotel_id).map(|h| h.value().clone()) else {
            return Ok(None);
        };
        let rooms = sorted_by_id(&self.rooms, |r| r.hotel_id == hotel_id);

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}
