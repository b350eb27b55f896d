// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod enrollment;
pub mod hotel;

pub use enrollment::{Enrollment, Ticket, TicketContext, TicketStatus, TicketType};
pub use hotel::{Hotel, HotelWithRooms, Room};
