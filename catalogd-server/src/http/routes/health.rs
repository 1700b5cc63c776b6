//! Health check route
//!
//! Probes the database on demand and reports connectivity plus the
//! store's version string.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::Row;

use crate::http::server::AppState;

/// Database status inside the health response
#[derive(Serialize)]
pub struct DatabaseHealth {
    pub connected: bool,
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: DatabaseHealth,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match sqlx::query("SELECT version()").fetch_one(&state.pool).await {
        Ok(row) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                database: DatabaseHealth {
                    connected: true,
                    version: Some(row.get(0)),
                    kind: "postgresql",
                },
            }),
        ),
        Err(err) => {
            tracing::warn!("Health probe failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    database: DatabaseHealth {
                        connected: false,
                        version: None,
                        kind: "postgresql",
                    },
                }),
            )
        }
    }
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_shape() {
        let body = HealthResponse {
            status: "ok",
            database: DatabaseHealth {
                connected: true,
                version: Some("PostgreSQL 16.2".to_owned()),
                kind: "postgresql",
            },
        };
        let value = serde_json::to_value(&body).expect("serialize failed");
        assert_eq!(value["status"], "ok");
        assert_eq!(value["database"]["connected"], true);
        assert_eq!(value["database"]["type"], "postgresql");
    }
}
