//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status
//! codes. Every error body has the shape `{"detail": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use catalogd_core::validation::ValidationError;

use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Product not found (404)
    NotFound { id: i32 },

    /// Duplicate product name (400)
    Conflict { name: String },

    /// Database error (500, logged)
    Database(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound { id } => (
                StatusCode::NOT_FOUND,
                format!("Product with ID {} not found", id),
            ),
            Self::Conflict { name } => (
                StatusCode::BAD_REQUEST,
                format!("Product with name '{}' already exists", name),
            ),
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id } => Self::NotFound { id },
            DbError::Conflict { name } => Self::Conflict { name },
            DbError::Sqlx(e) => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn conflict_is_400() {
        let err = ApiError::Conflict {
            name: "Laptop".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_body_names_the_id() {
        let response = ApiError::NotFound { id: 42 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read failed");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body not JSON");
        assert_eq!(body["detail"], "Product with ID 42 not found");
    }

    #[tokio::test]
    async fn db_not_found_maps_through() {
        let err: ApiError = DbError::NotFound { id: 7 }.into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn db_conflict_maps_through() {
        let err: ApiError = DbError::Conflict {
            name: "Laptop".into(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
