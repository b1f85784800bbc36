//! Order handlers, including the association endpoints.

use crate::error::AppError;
use crate::response::message;
use crate::service::{validation, OrderService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let draft = validation::order_draft(&body)?;
    let order = OrderService::create(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let orders = OrderService::list(&state.pool).await?;
    Ok(Json(orders))
}

/// Products attached to an order. A missing order is 404; an order with no
/// attachments is an empty array, not an error.
pub async fn list_products(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let products = OrderService::products_of(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {} not found", id)))?;
    Ok(Json(products))
}

pub async fn attach_product(
    State(state): State<AppState>,
    Path((id, product_id)): Path<(i64, i64)>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    OrderService::attach_product(&state.pool, id, product_id).await?;
    Ok(message("product added to order"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let deleted = OrderService::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::BadRequest("invalid order id".into()));
    }
    Ok(message("order deleted"))
}
