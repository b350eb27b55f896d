// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod eligibility;
pub mod hotel;

pub use eligibility::is_eligible;
pub use hotel::{HotelError, HotelService};
