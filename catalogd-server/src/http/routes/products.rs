//! Product endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use catalogd_core::list::{ListParams, ListWindow};
use catalogd_core::product::{CreateProduct, UpdateProduct};

use crate::db::repos::{Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Product response payload; all fields are always present.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            quantity: p.quantity,
        }
    }
}

/// Delete confirmation payload
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /products - list products with an offset/limit window
async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let window = ListWindow::from(params);
    let products = ProductRepo::new(&state.pool).list(window).await?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// GET /products/{product_id} - fetch one product
async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i32>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = ProductRepo::new(&state.pool).get(product_id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// POST /products - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<CreateProduct>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    draft.validate()?;
    let product = ProductRepo::new(&state.pool).create(&draft).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// PUT /products/{product_id} - apply the present fields of a patch
async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i32>,
    Json(patch): Json<UpdateProduct>,
) -> Result<Json<ProductResponse>, ApiError> {
    patch.validate()?;
    let product = ProductRepo::new(&state.pool)
        .update(product_id, &patch)
        .await?;
    Ok(Json(ProductResponse::from(product)))
}

/// DELETE /products/{product_id} - remove a product
async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    ProductRepo::new(&state.pool).delete(product_id).await?;
    Ok(Json(DeleteResponse {
        message: "Product deleted successfully",
    }))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{product_id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
