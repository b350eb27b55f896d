// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel routes for authenticated users.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Hotel, HotelWithRooms};
use crate::time_utils::format_api_timestamp;
use crate::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Hotel routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hotels", get(list_hotels))
        .route("/hotels/{hotelId}", get(get_hotel))
}

// ─── Responses ───────────────────────────────────────────────

/// Hotel as returned by the list endpoint.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HotelResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: format_api_timestamp(hotel.created_at),
            updated_at: format_api_timestamp(hotel.updated_at),
        }
    }
}

/// Room entry inside a hotel detail response.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RoomResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    pub capacity: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub hotel_id: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Hotel with its rooms.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HotelDetailResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelDetailResponse {
    fn from(detail: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = detail;
        let created_at = format_api_timestamp(hotel.created_at);
        let updated_at = format_api_timestamp(hotel.updated_at);

        // Clients expect room entries stamped with the hotel's timestamps.
        let rooms = rooms
            .into_iter()
            .map(|room| RoomResponse {
                id: room.id,
                name: room.name,
                capacity: room.capacity,
                hotel_id: room.hotel_id,
                created_at: created_at.clone(),
                updated_at: updated_at.clone(),
            })
            .collect();

        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at,
            updated_at,
            rooms,
        }
    }
}

// ─── Hotel List ──────────────────────────────────────────────

/// List all hotels, for users holding a hotel-eligible ticket.
async fn list_hotels(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<HotelResponse>>> {
    let hotels = state.hotel_service.list_hotels_for(user.user_id).await?;

    Ok(Json(hotels.into_iter().map(HotelResponse::from).collect()))
}

// ─── Hotel Detail ────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct HotelPath {
    #[serde(rename = "hotelId")]
    #[validate(custom(function = "validate_numeric_id"))]
    hotel_id: String,
}

/// Accept only a non-empty run of ASCII digits.
fn validate_numeric_id(value: &str) -> std::result::Result<(), ValidationError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new("numeric_id"));
    }
    Ok(())
}

fn invalid_hotel_id() -> AppError {
    AppError::BadRequest("Invalid 'hotelId' parameter".to_string())
}

impl HotelPath {
    fn hotel_id(&self) -> Result<u64> {
        self.validate().map_err(|_| invalid_hotel_id())?;
        // Digits only at this point, so the only failure left is overflow.
        self.hotel_id.parse().map_err(|_| invalid_hotel_id())
    }
}

/// Get one hotel with its rooms.
async fn get_hotel(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    path: std::result::Result<Path<HotelPath>, PathRejection>,
) -> Result<Json<HotelDetailResponse>> {
    // Segments axum cannot decode (e.g. invalid UTF-8) get the same JSON 400.
    let Path(path) = path.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected hotel path");
        invalid_hotel_id()
    })?;
    let hotel_id = path.hotel_id()?;

    tracing::debug!(user_id = user.user_id, hotel_id, "Fetching hotel detail");

    let detail = state
        .hotel_service
        .get_hotel_detail_for(user.user_id, hotel_id)
        .await?;

    Ok(Json(detail.into()))
}
