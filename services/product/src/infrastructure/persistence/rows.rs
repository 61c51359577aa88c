//! 数据库行映射结构

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// products 表的一行
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 插入或更新时写入的列
#[derive(Debug, Clone, PartialEq)]
pub struct ProductValues {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
}
