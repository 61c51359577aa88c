//! 商品仓储实现

use std::sync::Arc;

use async_trait::async_trait;
use catalog_common::PageRequest;
use tracing::debug;

use super::converters::{record_from_row, values_from_draft};
use super::store::ProductStore;
use crate::domain::repositories::ProductRepository;
use crate::domain::{ProductDraft, ProductId, ProductRecord};
use crate::error::{RepositoryError, RepositoryResult, StoreError};

/// 基于 [`ProductStore`] 的仓储实现
///
/// 不持有请求级状态，只持有存储句柄，可在并发请求间共享。
pub struct ProductRepositoryImpl {
    store: Arc<dyn ProductStore>,
}

impl ProductRepositoryImpl {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

/// “无此行”归类为 NotFound，其余归类为存储失败
fn classify(id: ProductId, operation: &'static str, err: StoreError) -> RepositoryError {
    match err {
        StoreError::RowNotFound => RepositoryError::NotFound(id),
        other => RepositoryError::storage(operation, other),
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryImpl {
    async fn find_all(&self, page: PageRequest) -> RepositoryResult<Vec<ProductRecord>> {
        let pagination = page.validate()?;
        debug!(
            limit = pagination.page_size(),
            offset = pagination.offset(),
            "Fetching products"
        );

        let rows = self
            .store
            .find_range(pagination.page_size(), pagination.offset())
            .await
            .map_err(|e| RepositoryError::storage("fetch products", e))?;

        Ok(rows.into_iter().map(record_from_row).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> RepositoryResult<ProductRecord> {
        let row = self
            .store
            .find_one(id.0)
            .await
            .map_err(|e| classify(id, "find product by id", e))?;

        Ok(record_from_row(row))
    }

    async fn create(&self, draft: ProductDraft) -> RepositoryResult<ProductRecord> {
        draft.validate()?;

        let row = self
            .store
            .insert(&values_from_draft(draft))
            .await
            .map_err(|e| RepositoryError::storage("create product", e))?;

        Ok(record_from_row(row))
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        let affected = self
            .store
            .delete(id.0)
            .await
            .map_err(|e| classify(id, "delete product", e))?;

        if affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> RepositoryResult<ProductRecord> {
        draft.validate()?;

        let affected = self
            .store
            .update(id.0, &values_from_draft(draft))
            .await
            .map_err(|e| classify(id, "update product", e))?;

        if affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        // 写入不返回列值，重新读取更新后的行
        let row = self
            .store
            .find_one(id.0)
            .await
            .map_err(|e| classify(id, "retrieve updated product", e))?;

        Ok(record_from_row(row))
    }
}
