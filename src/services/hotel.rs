// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel queries gated by ticket eligibility.

use crate::db::{DbError, HotelGateway};
use crate::models::{Hotel, HotelWithRooms};
use crate::services::eligibility::is_eligible;
use std::sync::Arc;

/// Why a hotel query did not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum HotelError {
    /// The user does not hold a qualifying ticket.
    #[error("User is not eligible to view hotels")]
    Forbidden,

    #[error("Hotel {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    Infrastructure(#[from] DbError),
}

/// Service answering hotel queries on behalf of a user.
#[derive(Clone)]
pub struct HotelService {
    gateway: Arc<dyn HotelGateway>,
}

impl HotelService {
    pub fn new(gateway: Arc<dyn HotelGateway>) -> Self {
        Self { gateway }
    }

    /// Fail with [`HotelError::Forbidden`] unless the user is eligible.
    async fn ensure_eligible(&self, user_id: u64) -> Result<(), HotelError> {
        let context = self.gateway.ticket_context_for_user(user_id).await?;

        if !is_eligible(context.as_ref()) {
            tracing::info!(
                user_id,
                has_ticket = context.is_some(),
                "Denied hotel access: no paid in-person ticket with hotel"
            );
            return Err(HotelError::Forbidden);
        }

        Ok(())
    }

    /// List all hotels. An empty list is a normal result.
    pub async fn list_hotels_for(&self, user_id: u64) -> Result<Vec<Hotel>, HotelError> {
        self.ensure_eligible(user_id).await?;

        let hotels = self.gateway.list_hotels().await?;
        tracing::debug!(user_id, count = hotels.len(), "Listed hotels");
        Ok(hotels)
    }

    /// Fetch one hotel with its rooms.
    ///
    /// Eligibility is checked first, so an ineligible user gets `Forbidden`
    /// whether or not the hotel exists.
    pub async fn get_hotel_detail_for(
        &self,
        user_id: u64,
        hotel_id: u64,
    ) -> Result<HotelWithRooms, HotelError> {
        self.ensure_eligible(user_id).await?;

        let detail = self
            .gateway
            .hotel_with_rooms(hotel_id)
            .await?
            .ok_or(HotelError::NotFound(hotel_id))?;

        tracing::debug!(
            user_id,
            hotel_id,
            rooms = detail.rooms.len(),
            "Fetched hotel detail"
        );
        Ok(detail)
    }
}
