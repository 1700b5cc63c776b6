//! Database migrations for the products table

use sqlx::PgPool;

/// Run all catalog migrations
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running catalog migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL UNIQUE,
            description VARCHAR(500),
            price DOUBLE PRECISION NOT NULL,
            quantity INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Catalog migrations complete");
    Ok(())
}

/// Example rows inserted by [`seed`].
const SAMPLE_PRODUCTS: &[(&str, Option<&str>, f64, i32)] = &[
    ("Laptop", Some("A high-end laptop"), 1500.00, 10),
    ("Mouse", Some("Wireless optical mouse"), 29.99, 50),
    ("Keyboard", Some("Tenkeyless mechanical keyboard"), 89.50, 25),
];

/// Seed example products, skipping names that already exist.
///
/// Runs inside one transaction so a partial seed never persists.
pub async fn seed(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for &(name, description, price, quantity) in SAMPLE_PRODUCTS {
        let inserted = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, quantity)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(quantity)
        .execute(&mut *tx)
        .await?;

        if inserted.rows_affected() > 0 {
            tracing::info!(product = name, "Seeded product");
        }
    }

    tx.commit().await?;
    tracing::info!("Seeding complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_reentrant() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seed_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        run(&pool).await.expect("migrations failed");

        seed(&pool).await.expect("first seed failed");
        seed(&pool).await.expect("second seed failed");

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM products WHERE name = 'Laptop'")
                .fetch_one(&pool)
                .await
                .expect("count failed");
        assert_eq!(count, 1);
    }
}
