//! Order persistence operations, including the order↔product association.

use crate::error::AppError;
use crate::model::{Order, Product};
use crate::service::validation::OrderDraft;
use sqlx::PgPool;

pub struct OrderService;

impl OrderService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Order>, AppError> {
        tracing::debug!("list orders");
        let rows = sqlx::query_as::<_, Order>(
            "SELECT id, order_date, customer_id FROM orders ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Order>, AppError> {
        tracing::debug!(id, "get order");
        let row = sqlx::query_as::<_, Order>(
            "SELECT id, order_date, customer_id FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Insert an order after resolving its customer. An unknown customer
    /// refuses the write before any row is touched.
    pub async fn create(pool: &PgPool, draft: &OrderDraft) -> Result<Order, AppError> {
        tracing::debug!(customer_id = draft.customer_id, "create order");
        let mut tx = pool.begin().await?;
        let customer: Option<(i64,)> = sqlx::query_as("SELECT id FROM customers WHERE id = $1")
            .bind(draft.customer_id)
            .fetch_optional(&mut *tx)
            .await?;
        if customer.is_none() {
            return Err(AppError::BadRequest("invalid customer id".into()));
        }
        let row = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (order_date, customer_id) VALUES ($1, $2) \
             RETURNING id, order_date, customer_id",
        )
        .bind(draft.order_date)
        .bind(draft.customer_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Products attached to one order. None means the order does not exist;
    /// an order with no attachments yields an empty vec.
    pub async fn products_of(pool: &PgPool, order_id: i64) -> Result<Option<Vec<Product>>, AppError> {
        tracing::debug!(order_id, "list products of order");
        let order: Option<(i64,)> = sqlx::query_as("SELECT id FROM orders WHERE id = $1")
            .bind(order_id)
            .fetch_optional(pool)
            .await?;
        if order.is_none() {
            return Ok(None);
        }
        let rows = sqlx::query_as::<_, Product>(
            "SELECT p.id, p.product_name, p.price FROM products p \
             JOIN order_products op ON op.product_id = p.id \
             WHERE op.order_id = $1 ORDER BY p.id",
        )
        .bind(order_id)
        .fetch_all(pool)
        .await?;
        Ok(Some(rows))
    }

    /// Attach one product to one order: resolve both ids, check the pair is
    /// not already present, insert. All inside one transaction so concurrent
    /// attaches cannot slip past the duplicate check mid-request.
    pub async fn attach_product(
        pool: &PgPool,
        order_id: i64,
        product_id: i64,
    ) -> Result<(), AppError> {
        tracing::debug!(order_id, product_id, "attach product to order");
        let mut tx = pool.begin().await?;
        let order: Option<(i64,)> = sqlx::query_as("SELECT id FROM orders WHERE id = $1")
            .bind(order_id)
            .fetch_optional(&mut *tx)
            .await?;
        if order.is_none() {
            return Err(AppError::BadRequest("invalid order id".into()));
        }
        let product: Option<(i64,)> = sqlx::query_as("SELECT id FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&mut *tx)
            .await?;
        if product.is_none() {
            return Err(AppError::BadRequest("invalid product id".into()));
        }
        let existing: Option<(i64,)> = sqlx::query_as(
            "SELECT order_id FROM order_products WHERE order_id = $1 AND product_id = $2",
        )
        .bind(order_id)
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await?;
        if existing.is_some() {
            return Err(AppError::BadRequest("product already in order".into()));
        }
        sqlx::query("INSERT INTO order_products (order_id, product_id) VALUES ($1, $2)")
            .bind(order_id)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    /// Delete one order and its association rows. Returns false when the
    /// order does not exist.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete order");
        let mut tx = pool.begin().await?;
        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(false);
        }
        sqlx::query("DELETE FROM order_products WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(true)
    }
}
