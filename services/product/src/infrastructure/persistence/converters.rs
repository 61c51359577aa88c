//! 数据库行与领域记录之间的转换

use crate::domain::{ProductDraft, ProductId, ProductRecord};

use super::rows::{ProductRow, ProductValues};

/// 将 ProductRow 转换为 ProductRecord
///
/// `description` 列为 NULL 时转换为空字符串。
pub fn record_from_row(row: ProductRow) -> ProductRecord {
    ProductRecord {
        id: ProductId(row.id),
        name: row.name,
        description: row.description.unwrap_or_default(),
        price: row.price,
        category: row.category,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// 将 ProductDraft 转换为待写入的列
pub fn values_from_draft(draft: ProductDraft) -> ProductValues {
    ProductValues {
        name: draft.name,
        description: Some(draft.description),
        price: draft.price,
        category: draft.category,
    }
}
