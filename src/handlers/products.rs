//! Product handlers. Same status-code conventions as customers.

use crate::error::AppError;
use crate::response::message;
use crate::service::{validation, ProductService};
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
    let draft = validation::product_draft(&body)?;
    let product = ProductService::create(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let products = ProductService::list(&state.pool).await?;
    Ok(Json(products))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let product = ProductService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {} not found", id)))?;
    Ok(Json(product))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let draft = validation::product_draft(&body)?;
    let product = ProductService::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| AppError::BadRequest("invalid product id".into()))?;
    Ok(Json(product))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let deleted = ProductService::delete(&state.pool, id, state.delete_policy).await?;
    if !deleted {
        return Err(AppError::BadRequest("invalid product id".into()));
    }
    Ok(message("product deleted"))
}
