//! Customer handlers: validate, call the service, serialize.
//!
//! Misses on the read path are 404; misses on the write path (update,
//! delete) are 400 "invalid id" so callers cannot distinguish a missing row
//! from a malformed one.

use crate::error::AppError;
use crate::response::message;
use crate::service::{validation, CustomerService};
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
    let draft = validation::customer_draft(&body)?;
    let customer = CustomerService::create(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let customers = CustomerService::list(&state.pool).await?;
    Ok(Json(customers))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let customer = CustomerService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {} not found", id)))?;
    Ok(Json(customer))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let draft = validation::customer_draft(&body)?;
    let customer = CustomerService::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| AppError::BadRequest("invalid customer id".into()))?;
    Ok(Json(customer))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let deleted = CustomerService::delete(&state.pool, id, state.delete_policy).await?;
    if !deleted {
        return Err(AppError::BadRequest("invalid customer id".into()));
    }
    Ok(message("customer deleted"))
}
