//! product-service - 商品目录服务
//!
//! HTTP → `ProductService`（线上表示）→ `ProductRepository`（内部记录）→ `ProductStore`（数据库行）

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
