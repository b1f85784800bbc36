//! Persisted row types. Field names are the wire contract: entities are
//! serialized to responses exactly as stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub price: f64,
}

/// `customer_id` is part of the serialized shape; the product association
/// collection is not (attached rows are reached via the order's products
/// endpoint, never embedded).
#[derive(Clone, Debug, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub order_date: NaiveDate,
    pub customer_id: i64,
}
