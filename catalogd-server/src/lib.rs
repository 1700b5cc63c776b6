//! catalogd-server: HTTP surface and persistence for the product catalog
//!
//! Exposes the product CRUD contract over axum with a sqlx PostgreSQL
//! pool behind it.

pub mod db;
pub mod http;

pub use http::{run_server, AppState, ServerConfig};
