// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! Request handling only ever reads through [`HotelGateway`]. Two backends
//! implement it: Firestore for deployments and an in-process snapshot for
//! local development and tests.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::models::{Enrollment, Hotel, HotelWithRooms, Room, Ticket, TicketContext, TicketType};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Collection names as constants.
pub mod collections {
    pub const ENROLLMENTS: &str = "enrollments";
    pub const TICKETS: &str = "tickets";
    pub const TICKET_TYPES: &str = "ticket_types";
    pub const HOTELS: &str = "hotels";
    pub const ROOMS: &str = "rooms";
}

/// Read access to the enrollment and hotel records.
///
/// Missing data is `Ok(None)`. `Err` is reserved for the backend failing to
/// answer at all.
#[async_trait]
pub trait HotelGateway: Send + Sync {
    /// Resolve the user's first enrollment, that enrollment's first ticket,
    /// and the ticket's type. "First" means lowest ID.
    ///
    /// Returns `None` if any link in the chain is missing.
    async fn ticket_context_for_user(&self, user_id: u64)
        -> Result<Option<TicketContext>, DbError>;

    /// All hotels, ascending by ID.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DbError>;

    /// One hotel and its rooms (ascending by ID), or `None` if no such hotel.
    async fn hotel_with_rooms(&self, hotel_id: u64) -> Result<Option<HotelWithRooms>, DbError>;
}

/// Errors from the storage backends.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database not connected (offline mode)")]
    Offline,

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Invalid fixture: {0}")]
    Fixture(String),
}

/// A complete set of records, as stored in a fixture file.
///
/// Used to build a [`MemoryDb`] and to seed the Firestore emulator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub ticket_types: Vec<TicketType>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}
