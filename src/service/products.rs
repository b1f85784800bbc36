//! Product persistence operations.

use crate::config::DeletePolicy;
use crate::error::AppError;
use crate::model::Product;
use crate::service::validation::ProductDraft;
use sqlx::PgPool;

pub struct ProductService;

impl ProductService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, AppError> {
        tracing::debug!("list products");
        let rows = sqlx::query_as::<_, Product>(
            "SELECT id, product_name, price FROM products ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Product>, AppError> {
        tracing::debug!(id, "get product");
        let row = sqlx::query_as::<_, Product>(
            "SELECT id, product_name, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, draft: &ProductDraft) -> Result<Product, AppError> {
        tracing::debug!(product_name = %draft.product_name, "create product");
        let row = sqlx::query_as::<_, Product>(
            "INSERT INTO products (product_name, price) VALUES ($1, $2) \
             RETURNING id, product_name, price",
        )
        .bind(&draft.product_name)
        .bind(draft.price)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Full replace of name and price. None means the row does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        draft: &ProductDraft,
    ) -> Result<Option<Product>, AppError> {
        tracing::debug!(id, "update product");
        let row = sqlx::query_as::<_, Product>(
            "UPDATE products SET product_name = $2, price = $3 WHERE id = $1 \
             RETURNING id, product_name, price",
        )
        .bind(id)
        .bind(&draft.product_name)
        .bind(draft.price)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Delete one product. Returns false when the row does not exist. A
    /// product attached to orders is refused under `Restrict`; `Cascade`
    /// removes the association rows first.
    pub async fn delete(pool: &PgPool, id: i64, policy: DeletePolicy) -> Result<bool, AppError> {
        tracing::debug!(id, ?policy, "delete product");
        let mut tx = pool.begin().await?;
        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(false);
        }
        let (assoc_count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM order_products WHERE product_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if assoc_count > 0 {
            match policy {
                DeletePolicy::Restrict => {
                    return Err(AppError::BadRequest(
                        "product still referenced by orders".into(),
                    ));
                }
                DeletePolicy::Cascade => {
                    sqlx::query("DELETE FROM order_products WHERE product_id = $1")
                        .bind(id)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(true)
    }
}
