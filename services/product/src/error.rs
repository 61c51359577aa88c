//! Service error types
//!
//! 存储 → 仓储 → 服务，每层一个错误类型。错误在仓储层归类一次，
//! 之后只增加上下文，不改变类别。

use std::error::Error as StdError;

use catalog_common::PaginationError;
use catalog_errors::AppError;
use thiserror::Error;

use crate::domain::{ProductId, ProductValidationError};

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 查询没有返回任何行
    #[error("no rows returned by the store")]
    RowNotFound,

    #[error(transparent)]
    Backend(Box<dyn StdError + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::RowNotFound,
            other => Self::Backend(Box::new(other)),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 仓储层错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("invalid pagination: {0}")]
    InvalidPagination(#[from] PaginationError),

    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ProductValidationError),

    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("failed to {operation}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl RepositoryError {
    pub fn storage(operation: &'static str, source: StoreError) -> Self {
        Self::Storage { operation, source }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPagination(_) | Self::InvalidProduct(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// 服务层错误
///
/// `Validation` 与 `NotFound` 原样透传仓储层的分类；其余错误包装上操作上下文。
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(RepositoryError),

    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("service: {context}")]
    Storage {
        context: String,
        #[source]
        source: RepositoryError,
    },
}

impl ServiceError {
    /// 透传可区分的错误，包装其余错误
    pub fn from_repository(err: RepositoryError, context: impl FnOnce() -> String) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound(id),
            err if err.is_validation() => Self::Validation(err),
            err => Self::Storage {
                context: context(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// 拼接完整的错误链，用于日志
pub fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::Validation(inner) => AppError::validation(inner.to_string()),
            ServiceError::NotFound(id) => AppError::not_found(format!("Product {} not found", id)),
            ServiceError::Storage { .. } => AppError::database(error_chain(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_error() -> RepositoryError {
        RepositoryError::storage(
            "find product",
            StoreError::backend("connection reset by peer"),
        )
    }

    #[test]
    fn test_sqlx_row_not_found_is_classified() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::RowNotFound
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Backend(_)
        ));
    }

    #[test]
    fn test_not_found_passes_through_unchanged() {
        let err = ServiceError::from_repository(RepositoryError::NotFound(ProductId(4)), || {
            unreachable!("context is only built for wrapped errors")
        });
        assert!(matches!(err, ServiceError::NotFound(ProductId(4))));
    }

    #[test]
    fn test_validation_passes_through_unchanged() {
        let err = ServiceError::from_repository(
            RepositoryError::InvalidPagination(PaginationError::NegativePage(-2)),
            || unreachable!("context is only built for wrapped errors"),
        );
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "invalid pagination: page must not be negative, got -2");
    }

    #[test]
    fn test_storage_error_is_wrapped_with_context() {
        let err = ServiceError::from_repository(storage_error(), || {
            "failed to get product 9".to_string()
        });

        assert_eq!(err.to_string(), "service: failed to get product 9");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("failed to find product"));
    }

    #[test]
    fn test_error_chain_preserves_cause() {
        let err = ServiceError::from_repository(storage_error(), || {
            "failed to get product 9".to_string()
        });

        assert_eq!(
            error_chain(&err),
            "service: failed to get product 9: failed to find product: connection reset by peer"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let not_found: AppError = ServiceError::NotFound(ProductId(1)).into();
        assert!(matches!(not_found, AppError::NotFound(_)));

        let validation: AppError = ServiceError::Validation(RepositoryError::InvalidProduct(
            ProductValidationError::EmptyName,
        ))
        .into();
        assert!(matches!(validation, AppError::Validation(ref m) if m == "invalid product: name must not be empty"));

        let storage: AppError = ServiceError::from_repository(storage_error(), || {
            "failed to get product 9".to_string()
        })
        .into();
        assert!(matches!(storage, AppError::Database(ref m) if m.contains("connection reset by peer")));
    }
}
