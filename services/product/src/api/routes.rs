//! 路由表

use std::sync::Arc;

use axum::{Router, routing::get};

use super::handlers;
use crate::application::ProductService;

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProductService>,
}

pub fn router(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/health", get(handlers::health_check))
        .with_state(AppState { service })
}
