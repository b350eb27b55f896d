//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Where enrollment and hotel records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataBackend {
    /// Cloud Firestore (or the emulator, via `FIRESTORE_EMULATOR_HOST`)
    Firestore,
    /// In-process snapshot, optionally seeded from a JSON fixture
    Memory { fixture: Option<PathBuf> },
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    pub data_backend: DataBackend,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            data_backend: DataBackend::Memory { fixture: None },
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_backend = match env::var("DATA_BACKEND").as_deref() {
            Err(_) | Ok("firestore") => DataBackend::Firestore,
            Ok("memory") => DataBackend::Memory {
                fixture: env::var("FIXTURE_PATH").ok().map(PathBuf::from),
            },
            Ok(other) => {
                return Err(ConfigError::Invalid("DATA_BACKEND", other.to_string()));
            }
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw.clone()))?,
            Err(_) => 8080,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port,
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
            data_backend,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
