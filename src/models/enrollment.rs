// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Enrollment, ticket and ticket type records.
//!
//! These are written by the registration and checkout systems; this crate
//! only ever reads them.

use serde::{Deserialize, Serialize};

/// A user's registration for the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Enrollment ID (also used as document ID)
    pub id: u64,
    /// Owning user
    pub user_id: u64,
}

/// Ticket lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
    /// Any status this service does not know about.
    #[serde(other)]
    Other,
}

impl TicketStatus {
    pub fn is_paid(self) -> bool {
        matches!(self, TicketStatus::Paid)
    }
}

/// A ticket held under an enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket ID (also used as document ID)
    pub id: u64,
    pub enrollment_id: u64,
    pub ticket_type_id: u64,
    pub status: TicketStatus,
}

/// Class of ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    /// Ticket type ID (also used as document ID)
    pub id: u64,
    pub name: String,
    /// Attendance does not require physical presence
    pub is_remote: bool,
    /// Holder is entitled to lodging
    pub includes_hotel: bool,
}

impl TicketType {
    /// In-person ticket class that comes with lodging.
    pub fn is_hostable(&self) -> bool {
        !self.is_remote && self.includes_hotel
    }
}

/// A user's enrollment → ticket → ticket type chain, fully resolved.
///
/// The gateway only builds one when every link exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketContext {
    pub enrollment: Enrollment,
    pub ticket: Ticket,
    pub ticket_type: TicketType,
}
