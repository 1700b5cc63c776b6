//! Structured error types for catalogd-core.
//!
//! Uses `thiserror` for composable library errors. The binary crate
//! wraps these with `anyhow` for convenience.

use thiserror::Error;

/// Configuration resolution errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required setting is missing
    #[error("missing required setting {name}; set the {name} environment variable")]
    MissingVar { name: &'static str },

    /// Setting has an unparseable value
    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}
