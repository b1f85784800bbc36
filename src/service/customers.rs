//! Customer persistence operations.

use crate::config::DeletePolicy;
use crate::error::AppError;
use crate::model::Customer;
use crate::service::validation::CustomerDraft;
use sqlx::PgPool;

pub struct CustomerService;

impl CustomerService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, AppError> {
        tracing::debug!("list customers");
        let rows = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, address FROM customers ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Customer>, AppError> {
        tracing::debug!(id, "get customer");
        let row = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, address FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, draft: &CustomerDraft) -> Result<Customer, AppError> {
        tracing::debug!(name = %draft.name, "create customer");
        let row = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (name, email, address) VALUES ($1, $2, $3) \
             RETURNING id, name, email, address",
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.address)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Full replace of the mutable fields. None means the row does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        draft: &CustomerDraft,
    ) -> Result<Option<Customer>, AppError> {
        tracing::debug!(id, "update customer");
        let row = sqlx::query_as::<_, Customer>(
            "UPDATE customers SET name = $2, email = $3, address = $4 WHERE id = $1 \
             RETURNING id, name, email, address",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.address)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Delete one customer. Returns false when the row does not exist. Under
    /// `Restrict` a customer with orders is refused; under `Cascade` its
    /// orders and their association rows go in the same transaction.
    pub async fn delete(pool: &PgPool, id: i64, policy: DeletePolicy) -> Result<bool, AppError> {
        tracing::debug!(id, ?policy, "delete customer");
        let mut tx = pool.begin().await?;
        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(false);
        }
        let (order_count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM orders WHERE customer_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if order_count > 0 {
            match policy {
                DeletePolicy::Restrict => {
                    return Err(AppError::BadRequest(
                        "customer still referenced by orders".into(),
                    ));
                }
                DeletePolicy::Cascade => {
                    sqlx::query(
                        "DELETE FROM order_products WHERE order_id IN \
                         (SELECT id FROM orders WHERE customer_id = $1)",
                    )
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                    sqlx::query("DELETE FROM orders WHERE customer_id = $1")
                        .bind(id)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(true)
    }
}
