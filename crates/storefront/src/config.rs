//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults serve a local instance.
//!
//! - `EQUIPPRO_HOST` - Bind address (default: 127.0.0.1)
//! - `EQUIPPRO_PORT` - Listen port (default: 3000)
//! - `EQUIPPRO_BASE_URL` - Public URL for the storefront
//!   (default: `http://localhost:3000`)

use std::net::{IpAddr, SocketAddr};

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
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("EQUIPPRO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("EQUIPPRO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("EQUIPPRO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("EQUIPPRO_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("EQUIPPRO_BASE_URL", "http://localhost:3000");

        Ok(Self {
            host,
            port,
            base_url,
        })
    }

    /// Socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable, falling back to a default.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().expect("valid ip"),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("EQUIPPRO_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
