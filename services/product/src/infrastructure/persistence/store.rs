//! 记录存储接口

use async_trait::async_trait;

use super::rows::{ProductRow, ProductValues};
use crate::error::StoreResult;

/// products 表的窄查询接口
///
/// 每个方法对应一条独立的语句，要么完整生效，要么不生效。
/// `find_one` 找不到行时返回 `StoreError::RowNotFound`；
/// `update` / `delete` 返回受影响的行数。
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 按 ID 升序取 `[offset, offset + limit)` 范围内的行
    async fn find_range(&self, limit: i64, offset: i64) -> StoreResult<Vec<ProductRow>>;

    async fn find_one(&self, id: i32) -> StoreResult<ProductRow>;

    /// 插入并返回存储分配了 ID 与时间戳的行
    async fn insert(&self, values: &ProductValues) -> StoreResult<ProductRow>;

    /// 覆盖列并刷新 `updated_at`
    async fn update(&self, id: i32, values: &ProductValues) -> StoreResult<u64>;

    async fn delete(&self, id: i32) -> StoreResult<u64>;
}
