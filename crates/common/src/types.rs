//! 通用类型定义

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 未指定 limit 时的默认页大小
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// 第一页的页码（页码从 0 开始）
pub const FIRST_PAGE: i64 = 0;

/// 分页参数校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page must not be negative, got {0}")]
    NegativePage(i64),

    #[error("limit must be a positive integer, got {0}")]
    NonPositiveLimit(i64),
}

/// 分页请求
///
/// 调用方传入的原始参数，尚未校验。缺省的字段在 [`PageRequest::validate`]
/// 中取默认值：`page = 0`，`limit = 20`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// 校验并填充默认值
    pub fn validate(self) -> Result<Pagination, PaginationError> {
        let page = self.page.unwrap_or(FIRST_PAGE);
        let page_size = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < FIRST_PAGE {
            return Err(PaginationError::NegativePage(page));
        }
        if page_size < 1 {
            return Err(PaginationError::NonPositiveLimit(page_size));
        }

        Ok(Pagination { page, page_size })
    }
}

/// 分页参数（已校验）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: i64,
    page_size: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// 查询偏移量：`page × page_size`
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.page_size)
    }
}
