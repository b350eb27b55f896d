// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Hotel Access: hotel and room inventory for event attendees
//!
//! This crate provides a read-only API listing hotels and their rooms to
//! users who hold a paid, in-person ticket that includes lodging.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::HotelService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub hotel_service: HotelService,
}
