//! 商品服务
//!
//! HTTP 层唯一可调用的组件。只做线上表示与内部记录的转换、调用仓储、
//! 包装错误，不包含业务规则。

use std::sync::Arc;

use catalog_common::PageRequest;
use tracing::info;

use crate::domain::ProductId;
use crate::domain::repositories::ProductRepository;
use crate::error::{ServiceError, ServiceResult};

use super::dto::{Product, ProductInput};
use super::mapping::{draft_from_input, to_wire, to_wire_list};

pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// 分页查询商品
    pub async fn fetch_all(&self, page: PageRequest) -> ServiceResult<Vec<Product>> {
        let records = self.repo.find_all(page).await.map_err(|e| {
            ServiceError::from_repository(e, || {
                format!(
                    "failed to fetch products (page {:?}, limit {:?})",
                    page.page, page.limit
                )
            })
        })?;

        Ok(to_wire_list(records))
    }

    /// 根据 ID 获取商品
    pub async fn get_by_id(&self, id: ProductId) -> ServiceResult<Product> {
        let record = self.repo.find_by_id(id).await.map_err(|e| {
            ServiceError::from_repository(e, || format!("failed to get product {}", id))
        })?;

        Ok(to_wire(record))
    }

    /// 创建商品
    pub async fn create(&self, input: ProductInput) -> ServiceResult<Product> {
        let record = self
            .repo
            .create(draft_from_input(input))
            .await
            .map_err(|e| ServiceError::from_repository(e, || "failed to create product".to_string()))?;

        info!(product_id = %record.id, "Product created");
        Ok(to_wire(record))
    }

    /// 删除商品
    pub async fn delete(&self, id: ProductId) -> ServiceResult<()> {
        self.repo.delete(id).await.map_err(|e| {
            ServiceError::from_repository(e, || format!("failed to delete product {}", id))
        })?;

        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// 更新商品
    pub async fn update(&self, id: ProductId, input: ProductInput) -> ServiceResult<Product> {
        let record = self
            .repo
            .update(id, draft_from_input(input))
            .await
            .map_err(|e| {
                ServiceError::from_repository(e, || format!("failed to update product {}", id))
            })?;

        info!(product_id = %id, "Product updated");
        Ok(to_wire(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockProductRepository;
    use crate::domain::{ProductDraft, ProductRecord, ProductValidationError};
    use crate::error::{RepositoryError, StoreError};
    use catalog_common::PaginationError;
    use chrono::Utc;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use std::error::Error;

    fn record(id: i32, name: &str) -> ProductRecord {
        let now = Utc::now();
        ProductRecord {
            id: ProductId(id),
            name: name.to_string(),
            description: String::new(),
            price: Decimal::new(999, 2),
            category: "Tools".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn input() -> ProductInput {
        ProductInput {
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(999, 2),
            category: "Tools".to_string(),
        }
    }

    fn service(mock: MockProductRepository) -> ProductService {
        ProductService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_fetch_all_maps_records_to_wire() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_all()
            .with(eq(PageRequest::new(0, 2)))
            .times(1)
            .returning(|_| Ok(vec![record(1, "a"), record(2, "b")]));

        let products = service(mock).fetch_all(PageRequest::new(0, 2)).await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId(1));
        assert_eq!(products[1].name, "b");
        assert_eq!(products[0].description.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_fetch_all_passes_validation_through() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_all()
            .returning(|_| Err(PaginationError::NegativePage(-1).into()));

        let err = service(mock)
            .fetch_all(PageRequest::new(-1, 20))
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_get_by_id_passes_not_found_through() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id()
            .with(eq(ProductId(7)))
            .times(1)
            .returning(|id| Err(RepositoryError::NotFound(id)));

        let err = service(mock).get_by_id(ProductId(7)).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(ProductId(7))));
    }

    #[tokio::test]
    async fn test_get_by_id_wraps_storage_error_with_id() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id().returning(|_| {
            Err(RepositoryError::storage(
                "find product by id",
                StoreError::backend("pool timed out"),
            ))
        });

        let err = service(mock).get_by_id(ProductId(3)).await.unwrap_err();

        assert!(matches!(err, ServiceError::Storage { .. }));
        assert_eq!(err.to_string(), "service: failed to get product 3");
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn test_create_converts_input_to_draft() {
        let expected = ProductDraft {
            name: "Widget".to_string(),
            description: String::new(),
            price: Decimal::new(999, 2),
            category: "Tools".to_string(),
        };

        let mut mock = MockProductRepository::new();
        mock.expect_create()
            .with(eq(expected))
            .times(1)
            .returning(|_| Ok(record(11, "Widget")));

        let product = service(mock).create(input()).await.unwrap();

        assert_eq!(product.id, ProductId(11));
        assert_eq!(product.price, Decimal::new(999, 2));
    }

    #[tokio::test]
    async fn test_create_passes_invalid_product_through() {
        let mut mock = MockProductRepository::new();
        mock.expect_create()
            .returning(|_| Err(ProductValidationError::EmptyName.into()));

        let err = service(mock).create(input()).await.unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_delete_wraps_storage_error() {
        let mut mock = MockProductRepository::new();
        mock.expect_delete().with(eq(ProductId(5))).returning(|_| {
            Err(RepositoryError::storage(
                "delete product",
                StoreError::backend("connection refused"),
            ))
        });

        let err = service(mock).delete(ProductId(5)).await.unwrap_err();

        assert_eq!(err.to_string(), "service: failed to delete product 5");
    }

    #[tokio::test]
    async fn test_update_returns_reread_record() {
        let mut mock = MockProductRepository::new();
        mock.expect_update()
            .withf(|id, draft| *id == ProductId(2) && draft.name == "Widget")
            .times(1)
            .returning(|id, _| Ok(record(id.0, "Widget")));

        let product = service(mock).update(ProductId(2), input()).await.unwrap();

        assert_eq!(product.id, ProductId(2));
        assert_eq!(product.name, "Widget");
    }

    #[tokio::test]
    async fn test_update_passes_not_found_through() {
        let mut mock = MockProductRepository::new();
        mock.expect_update()
            .returning(|id, _| Err(RepositoryError::NotFound(id)));

        let err = service(mock).update(ProductId(8), input()).await.unwrap_err();

        assert!(err.is_not_found());
    }
}
