//! 商品记录

use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 名称最大长度（字符）
pub const MAX_NAME_LEN: usize = 255;
/// 描述最大长度（字符）
pub const MAX_DESCRIPTION_LEN: usize = 255;
/// 分类最大长度（字符）
pub const MAX_CATEGORY_LEN: usize = 100;
/// 价格允许的小数位数
pub const PRICE_SCALE: u32 = 2;
/// 价格上限，对应 `NUMERIC(10, 2)` 列
pub const MAX_PRICE: Decimal = Decimal::from_parts(0x540B_E3FF, 2, 0, false, 2); // 99_999_999.99

/// 商品 ID，由存储在插入时分配
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct ProductId(pub i32);

/// 商品记录（仓储层使用的内部形态）
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    /// 可为空字符串，不区分“缺省”与“空”
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductRecord {
    /// 可写字段
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
        }
    }
}

/// 创建或更新时写入的字段（不含 ID 与时间戳）
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
}

/// 商品字段校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name must be at most 255 characters, got {0}")]
    NameTooLong(usize),

    #[error("description must be at most 255 characters, got {0}")]
    DescriptionTooLong(usize),

    #[error("category must not be empty")]
    EmptyCategory,

    #[error("category must be at most 100 characters, got {0}")]
    CategoryTooLong(usize),

    #[error("price must not be negative, got {0}")]
    NegativePrice(Decimal),

    #[error("price must have at most 2 decimal places, got {0}")]
    PricePrecision(Decimal),

    #[error("price must be at most 99999999.99, got {0}")]
    PriceTooLarge(Decimal),
}

impl ProductDraft {
    /// 校验必填字段与取值范围
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        let name_len = self.name.chars().count();
        if name_len > MAX_NAME_LEN {
            return Err(ProductValidationError::NameTooLong(name_len));
        }

        let description_len = self.description.chars().count();
        if description_len > MAX_DESCRIPTION_LEN {
            return Err(ProductValidationError::DescriptionTooLong(description_len));
        }

        if self.category.trim().is_empty() {
            return Err(ProductValidationError::EmptyCategory);
        }
        let category_len = self.category.chars().count();
        if category_len > MAX_CATEGORY_LEN {
            return Err(ProductValidationError::CategoryTooLong(category_len));
        }

        if self.price < Decimal::ZERO {
            return Err(ProductValidationError::NegativePrice(self.price));
        }
        if self.price.normalize().scale() > PRICE_SCALE {
            return Err(ProductValidationError::PricePrecision(self.price));
        }
        if self.price > MAX_PRICE {
            return Err(ProductValidationError::PriceTooLarge(self.price));
        }

        Ok(())
    }
}
