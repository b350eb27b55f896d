// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides read operations for:
//! - Enrollments, tickets and ticket types (eligibility chain)
//! - Hotels and rooms (inventory)
//!
//! Every collection uses the record ID as its document ID.

use crate::db::{collections, DbError, Fixture, HotelGateway};
use crate::models::{Enrollment, Hotel, HotelWithRooms, Room, Ticket, TicketContext, TicketType};
use async_trait::async_trait;
use firestore::FirestoreQueryDirection::Ascending;
use futures_util::future;
use serde::{de::DeserializeOwned, Serialize};

// Firestore limits batch/transaction writes to 500 operations.
// We use a safe limit of 400 to allow headroom.
const BATCH_SIZE: usize = 400;

fn query_error(e: firestore::errors::FirestoreError) -> DbError {
    DbError::Query(e.to_string())
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, DbError> {
        // The emulator rejects real credentials, so skip the default token source.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| DbError::Query(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, DbError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| DbError::Query(format!("Failed to connect to Firestore Emulator: {}", e)))?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return [`DbError::Offline`].
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    fn get_client(&self) -> Result<&firestore::FirestoreDb, DbError> {
        self.client.as_ref().ok_or(DbError::Offline)
    }

    // ─── Eligibility Chain ───────────────────────────────────────

    /// Lowest-ID enrollment belonging to the user.
    async fn first_enrollment(&self, user_id: u64) -> Result<Option<Enrollment>, DbError> {
        let mut found: Vec<Enrollment> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ENROLLMENTS)
            .filter(move |q| q.field("user_id").eq(user_id))
            .order_by([("id", Ascending)])
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(query_error)?;
        Ok(found.pop())
    }

    /// Lowest-ID ticket under the enrollment.
    async fn first_ticket(&self, enrollment_id: u64) -> Result<Option<Ticket>, DbError> {
        let mut found: Vec<Ticket> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::TICKETS)
            .filter(move |q| q.field("enrollment_id").eq(enrollment_id))
            .order_by([("id", Ascending)])
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(query_error)?;
        Ok(found.pop())
    }

    async fn get_ticket_type(&self, ticket_type_id: u64) -> Result<Option<TicketType>, DbError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::TICKET_TYPES)
            .obj()
            .one(&ticket_type_id.to_string())
            .await
            .map_err(query_error)
    }

    // ─── Seeding ─────────────────────────────────────────────────

    /// Write every record of a fixture, overwriting documents with the same ID.
    ///
    /// Request handling never writes; this exists to load the emulator.
    pub async fn seed(&self, fixture: &Fixture) -> Result<(), DbError> {
        self.batch_put(&fixture.enrollments, collections::ENROLLMENTS, |e| e.id)
            .await?;
        self.batch_put(&fixture.tickets, collections::TICKETS, |t| t.id)
            .await?;
        self.batch_put(&fixture.ticket_types, collections::TICKET_TYPES, |t| t.id)
            .await?;
        self.batch_put(&fixture.hotels, collections::HOTELS, |h| h.id)
            .await?;
        self.batch_put(&fixture.rooms, collections::ROOMS, |r| r.id)
            .await?;

        tracing::info!(
            enrollments = fixture.enrollments.len(),
            tickets = fixture.tickets.len(),
            hotels = fixture.hotels.len(),
            rooms = fixture.rooms.len(),
            "Seeded Firestore from fixture"
        );
        Ok(())
    }

    /// Helper to batch write documents using transactions.
    async fn batch_put<T, F>(&self, items: &[T], collection: &str, id_of: F) -> Result<(), DbError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: Fn(&T) -> u64,
    {
        let client = self.get_client()?;

        for chunk in items.chunks(BATCH_SIZE) {
            let mut transaction = client
                .begin_transaction()
                .await
                .map_err(|e| DbError::Query(format!("Failed to begin transaction: {}", e)))?;

            for item in chunk {
                let doc_id = id_of(item).to_string();
                client
                    .fluent()
                    .update()
                    .in_col(collection)
                    .document_id(&doc_id)
                    .object(item)
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        DbError::Query(format!(
                            "Failed to add write to transaction for {}: {}",
                            collection, e
                        ))
                    })?;
            }

            transaction
                .commit()
                .await
                .map_err(|e| DbError::Query(format!("Failed to commit batch write: {}", e)))?;
        }

        Ok(())
    }
}

#[async_trait]
impl HotelGateway for FirestoreDb {
    async fn ticket_context_for_user(
        &self,
        user_id: u64,
    ) -> Result<Option<TicketContext>, DbError> {
        let Some(enrollment) = self.first_enrollment(user_id).await? else {
            return Ok(None);
        };
        let Some(ticket) = self.first_ticket(enrollment.id).await? else {
            return Ok(None);
        };
        let Some(ticket_type) = self.get_ticket_type(ticket.ticket_type_id).await? else {
            tracing::warn!(
                ticket_id = ticket.id,
                ticket_type_id = ticket.ticket_type_id,
                "Ticket references a missing ticket type"
            );
            return Ok(None);
        };

        Ok(Some(TicketContext {
            enrollment,
            ticket,
            ticket_type,
        }))
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>, DbError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::HOTELS)
            .order_by([("id", Ascending)])
            .obj()
            .query()
            .await
            .map_err(query_error)
    }

    async fn hotel_with_rooms(&self, hotel_id: u64) -> Result<Option<HotelWithRooms>, DbError> {
        let client = self.get_client()?;
        let doc_id = hotel_id.to_string();

        // Both reads are independent; issue them together.
        let hotel_read = client
            .fluent()
            .select()
            .by_id_in(collections::HOTELS)
            .obj::<Hotel>()
            .one(&doc_id);
        let rooms_read = client
            .fluent()
            .select()
            .from(collections::ROOMS)
            .filter(move |q| q.field("hotel_id").eq(hotel_id))
            .order_by([("id", Ascending)])
            .obj::<Room>()
            .query();

        let (hotel, rooms) = future::try_join(hotel_read, rooms_read)
            .await
            .map_err(query_error)?;

        Ok(hotel.map(|hotel| HotelWithRooms { hotel, rooms }))
    }
}
