//! Liveness route

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Liveness response
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Product catalog service is running",
    })
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
