//! Product repository
//!
//! One method per catalog operation, each a single statement so the
//! store's per-statement atomicity covers the whole request.

use sqlx::{FromRow, PgPool};

use catalogd_core::list::ListWindow;
use catalogd_core::product::{CreateProduct, UpdateProduct};

/// Product row from the database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("product {id} not found")]
    NotFound { id: i32 },

    #[error("product name '{name}' already taken")]
    Conflict { name: String },
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        Self::Sqlx(err)
    }
}

/// Map a unique-constraint violation on `name` to a conflict.
fn map_unique_violation(err: sqlx::Error, name: &str) -> DbError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => DbError::Conflict {
            name: name.to_owned(),
        },
        _ => DbError::Sqlx(err),
    }
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products in id order, bounded by the window.
    pub async fn list(&self, window: ListWindow) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as(
            r#"
            SELECT id, name, description, price, quantity
            FROM products
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a single product by id.
    pub async fn get(&self, id: i32) -> Result<Product, DbError> {
        let product: Option<Product> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, quantity
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        product.ok_or(DbError::NotFound { id })
    }

    /// Insert a new product, returning the persisted row.
    ///
    /// The caller validates the draft first; this only maps the unique
    /// name constraint to a conflict.
    pub async fn create(&self, draft: &CreateProduct) -> Result<Product, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO products (name, description, price, quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, quantity
            "#,
        )
        .bind(&draft.name)
        .bind(draft.description.as_deref())
        .bind(draft.price)
        .bind(draft.quantity)
        .fetch_one(self.pool)
        .await
        .map_err(|err| map_unique_violation(err, &draft.name))
    }

    /// Apply the present fields of a patch, leaving the rest unchanged.
    ///
    /// COALESCE keeps absent columns at their stored value, so the whole
    /// update is one atomic statement.
    pub async fn update(&self, id: i32, patch: &UpdateProduct) -> Result<Product, DbError> {
        let product: Option<Product> = sqlx::query_as(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                quantity = COALESCE($5, quantity)
            WHERE id = $1
            RETURNING id, name, description, price, quantity
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.price)
        .bind(patch.quantity)
        .fetch_optional(self.pool)
        .await
        .map_err(|err| match &patch.name {
            Some(name) => map_unique_violation(err, name),
            None => DbError::Sqlx(err),
        })?;

        product.ok_or(DbError::NotFound { id })
    }

    /// Delete a product by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        Ok(())
    }
}
