//! catalogd-core: domain types for the product catalog service
//!
//! Pure logic shared by the server: product payloads and their
//! validation rules, list windowing, configuration, and error types.
//! No I/O happens in this crate.

pub mod config;
pub mod error;
pub mod list;
pub mod product;
pub mod validation;

pub use config::Config;
pub use error::ConfigError;
pub use list::{ListParams, ListWindow};
pub use product::{CreateProduct, UpdateProduct};
pub use validation::ValidationError;
