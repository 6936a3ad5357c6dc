//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run the storefront locally.
//!
//! - `ILARA_HOST` - Bind address (default: 127.0.0.1)
//! - `ILARA_PORT` - Listen port (default: 3000)
//! - `ILARA_BASE_URL` - Public URL for the storefront
//!   (default: `http://localhost:3000`)
//! - `ILARA_CATALOG_PATH` - Path to the catalog JSON document
//!   (default: crates/storefront/data/products.json)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Path to the catalog JSON document
    pub catalog_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ILARA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ILARA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ILARA_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ILARA_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("ILARA_BASE_URL", "http://localhost:3000");
        let catalog_path =
            PathBuf::from(get_env_or_default("ILARA_CATALOG_PATH", DEFAULT_CATALOG_PATH));

        Ok(Self {
            host,
            port,
            base_url,
            catalog_path,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Default catalog document, shipped with the crate.
const DEFAULT_CATALOG_PATH: &str = "crates/storefront/data/products.json";

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
