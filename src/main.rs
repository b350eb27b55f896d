// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel Access API Server
//!
//! Serves hotel inventory to attendees whose ticket includes lodging.

use hotel_access::{
    config::{Config, DataBackend},
    db::{FirestoreDb, HotelGateway, MemoryDb},
    services::HotelService,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Hotel Access API");

    let gateway: Arc<dyn HotelGateway> = match &config.data_backend {
        DataBackend::Firestore => Arc::new(FirestoreDb::new(&config.gcp_project_id).await?),
        DataBackend::Memory { fixture: Some(path) } => {
            tracing::info!(path = %path.display(), "Loading fixture");
            Arc::new(MemoryDb::load_from_file(path)?)
        }
        DataBackend::Memory { fixture: None } => {
            tracing::warn!("In-memory backend without fixture; every user will be denied");
            Arc::new(MemoryDb::default())
        }
    };

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        hotel_service: HotelService::new(gateway),
    });

    // Build router
    let app = hotel_access::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hotel_access=debug".parse().expect("valid directive"))
                .add_directive("info".parse().expect("valid directive")),
        )
        .with(format)
        .init();
}
