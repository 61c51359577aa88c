//! HTTP 处理器
//!
//! 只负责解析请求、调用 [`ProductService`](crate::application::ProductService)
//! 与选择状态码，错误统一经 [`AppError`] 转为 Problem Details。

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use catalog_common::PageRequest;
use catalog_errors::{AppError, AppResult};
use serde::Serialize;

use super::routes::AppState;
use crate::application::{Product, ProductInput};
use crate::domain::ProductId;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// 请求体解析失败按校验错误处理
fn parse_body(payload: Result<Json<ProductInput>, JsonRejection>) -> AppResult<ProductInput> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| AppError::validation(rejection.body_text()))
}

/// GET /products?page=&limit=
pub async fn list_products(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.service.fetch_all(page).await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<Json<Product>> {
    let product = state.service.get_by_id(id).await?;
    Ok(Json(product))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let input = parse_body(payload)?;
    let product = state.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let input = parse_body(payload)?;
    let product = state.service.update(id, input).await?;
    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<StatusCode> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
