//! Service configuration
//!
//! Resolved once at startup and passed down explicitly; nothing here is
//! process-global. The database URL is required and startup fails
//! without it.

use std::net::SocketAddr;

use crate::error::ConfigError;

/// Default bind address
const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Default allowed CORS origin
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Default pool size
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Resolved service settings
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string (required)
    pub database_url: String,
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Single origin allowed for cross-origin requests
    pub cors_origin: String,
    /// Maximum connections in the database pool
    pub max_connections: u32,
}

impl Config {
    /// Resolve configuration from the process environment.
    ///
    /// Reads `DATABASE_URL` (required), `CATALOGD_BIND`,
    /// `CATALOGD_CORS_ORIGIN`, and `CATALOGD_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("CATALOGD_BIND").ok(),
            std::env::var("CATALOGD_CORS_ORIGIN").ok(),
            std::env::var("CATALOGD_MAX_CONNECTIONS").ok(),
        )
    }

    /// Resolve configuration from explicit values, applying defaults.
    ///
    /// The binary feeds command-line flags through here so flags and
    /// environment variables share one parsing path.
    pub fn resolve(
        database_url: Option<String>,
        bind: Option<String>,
        cors_origin: Option<String>,
        max_connections: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url.ok_or(ConfigError::MissingVar {
            name: "DATABASE_URL",
        })?;

        let bind_addr = bind
            .as_deref()
            .unwrap_or(DEFAULT_BIND)
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigError::InvalidVar {
                name: "CATALOGD_BIND",
                reason: err.to_string(),
            })?;

        let max_connections = match max_connections {
            Some(raw) => raw
                .parse()
                .map_err(|err: std::num::ParseIntError| ConfigError::InvalidVar {
                    name: "CATALOGD_MAX_CONNECTIONS",
                    reason: err.to_string(),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            bind_addr,
            cors_origin: cors_origin.unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_owned()),
            max_connections,
        })
    }
}
