//! PostgreSQL-backed OrderLine store.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};

use super::{OrderLineStore, StoreError};
use crate::models::{OrderLine, OrderLinePatch};

/// PostgreSQL connection pool.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// OrderLine store over a `order_line` table.
///
/// Expected schema:
///
/// ```sql
/// CREATE TABLE order_line (
///     id          BIGSERIAL PRIMARY KEY,
///     quantity    INTEGER NOT NULL,
///     total_price NUMERIC(21, 2) NOT NULL,
///     product_id  BIGINT
/// );
/// ```
pub struct PgOrderLineStore {
    pool: PgPool,
}

impl PgOrderLineStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_order_line(row: &PgRow) -> OrderLine {
    OrderLine {
        id: Some(row.get("id")),
        quantity: row.get("quantity"),
        total_price: row.get("total_price"),
        product_id: row.get("product_id"),
    }
}

#[async_trait]
impl OrderLineStore for PgOrderLineStore {
    async fn save(&self, entity: OrderLine) -> Result<OrderLine, StoreError> {
        let row = sqlx::query(
            r#"INSERT INTO order_line (quantity, total_price, product_id)
               VALUES ($1, $2, $3)
               RETURNING id, quantity, total_price, product_id"#,
        )
        .bind(entity.quantity)
        .bind(entity.total_price)
        .bind(entity.product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_order_line(&row))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let row = sqlx::query(r#"SELECT EXISTS(SELECT 1 FROM order_line WHERE id = $1) AS found"#)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("found"))
    }

    async fn update(&self, entity: OrderLine) -> Result<OrderLine, StoreError> {
        let id = entity.id.ok_or(StoreError::MissingId)?;
        let row = sqlx::query(
            r#"UPDATE order_line
               SET quantity = $2, total_price = $3, product_id = $4
               WHERE id = $1
               RETURNING id, quantity, total_price, product_id"#,
        )
        .bind(id)
        .bind(entity.quantity)
        .bind(entity.total_price)
        .bind(entity.product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_order_line(&row))
    }

    async fn partial_update(
        &self,
        patch: OrderLinePatch,
    ) -> Result<Option<OrderLine>, StoreError> {
        let id = patch.id.ok_or(StoreError::MissingId)?;

        // Read-merge-write under a transaction so concurrent patches to
        // the same row serialize at the database.
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"SELECT id, quantity, total_price, product_id
               FROM order_line WHERE id = $1 FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        let mut stored = row_to_order_line(&row);
        patch.apply_to(&mut stored);

        sqlx::query(
            r#"UPDATE order_line
               SET quantity = $2, total_price = $3, product_id = $4
               WHERE id = $1"#,
        )
        .bind(id)
        .bind(stored.quantity)
        .bind(stored.total_price)
        .bind(stored.product_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(stored))
    }

    async fn find_all(&self, _eagerload: bool) -> Result<Vec<OrderLine>, StoreError> {
        let rows = sqlx::query(
            r#"SELECT id, quantity, total_price, product_id FROM order_line ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_order_line).collect())
    }

    async fn find_one(&self, id: i64) -> Result<Option<OrderLine>, StoreError> {
        let row = sqlx::query(
            r#"SELECT id, quantity, total_price, product_id FROM order_line WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| row_to_order_line(&r)))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM order_line WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
