//! Configuration management for the posts service
//!
//! Everything is loaded from environment variables; a `.env` file is
//! honored by the binary before this module runs.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Hosted store (PostgREST) configuration
    pub store: StoreConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, `*` allows any
    pub allowed_origins: String,
}

/// Hosted store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the hosted store (without the `/rest/v1` suffix)
    pub url: String,
    /// Service key, sent as `apikey` and bearer token
    pub service_key: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Store credentials are required; the service refuses to start
    /// without them rather than failing on the first query.
    pub fn from_env() -> Result<Self, String> {
        let store_url =
            std::env::var("SUPABASE_URL").map_err(|_| "SUPABASE_URL must be set".to_string())?;
        let service_key = std::env::var("SUPABASE_SERVICE_KEY")
            .map_err(|_| "SUPABASE_SERVICE_KEY must be set".to_string())?;

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
            store: StoreConfig {
                url: store_url,
                service_key,
                timeout_ms: std::env::var("STORE_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10_000),
            },
        })
    }
}
