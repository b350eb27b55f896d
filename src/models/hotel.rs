// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Hotel and room inventory models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hotel record stored in Firestore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    /// Hotel ID (also used as document ID)
    pub id: u64,
    pub name: String,
    /// Image URL
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Room record, owned by a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room ID (also used as document ID)
    pub id: u64,
    pub name: String,
    /// Number of guests the room sleeps
    pub capacity: u32,
    pub hotel_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A hotel together with its rooms, ordered by room ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}
