//! 商品仓储接口

use async_trait::async_trait;
use catalog_common::PageRequest;

use crate::domain::{ProductDraft, ProductId, ProductRecord};
use crate::error::RepositoryResult;

/// 商品仓储接口
///
/// 唯一允许访问存储的组件。存储的“无此行”信号被归类为
/// `RepositoryError::NotFound`，其余存储错误归为 `RepositoryError::Storage`。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 分页查询，按 ID 升序。页码从 0 开始，非法分页参数不会触达存储
    async fn find_all(&self, page: PageRequest) -> RepositoryResult<Vec<ProductRecord>>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: ProductId) -> RepositoryResult<ProductRecord>;

    /// 新建，返回存储分配了 ID 与时间戳的记录
    async fn create(&self, draft: ProductDraft) -> RepositoryResult<ProductRecord>;

    /// 删除（物理删除）
    async fn delete(&self, id: ProductId) -> RepositoryResult<()>;

    /// 覆盖可写字段并刷新 `updated_at`，返回更新后重新读取的记录
    async fn update(&self, id: ProductId, draft: ProductDraft) -> RepositoryResult<ProductRecord>;
}
