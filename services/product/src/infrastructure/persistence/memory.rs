//! 内存记录存储
//!
//! 用于测试和无数据库的本地运行，行为与 PostgreSQL 实现一致：
//! ID 自增且不复用，`updated_at` 每次更新严格递增。

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use tokio::sync::RwLock;

use super::rows::{ProductRow, ProductValues};
use super::store::ProductStore;
use crate::error::{StoreError, StoreResult};

#[derive(Debug)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, ProductRow>,
}

#[derive(Debug)]
pub struct InMemoryProductStore {
    table: RwLock<Table>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// 当前行数
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

fn to_usize(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_range(&self, limit: i64, offset: i64) -> StoreResult<Vec<ProductRow>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .skip(to_usize(offset))
            .take(to_usize(limit))
            .cloned()
            .collect())
    }

    async fn find_one(&self, id: i32) -> StoreResult<ProductRow> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(StoreError::RowNotFound)
    }

    async fn insert(&self, values: &ProductValues) -> StoreResult<ProductRow> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::backend("product id sequence exhausted"))?;

        let now = Utc::now();
        let row = ProductRow {
            id,
            name: values.name.clone(),
            description: values.description.clone(),
            price: values.price,
            category: values.category.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(id, row.clone());

        Ok(row)
    }

    async fn update(&self, id: i32, values: &ProductValues) -> StoreResult<u64> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(0);
        };

        row.name = values.name.clone();
        row.description = values.description.clone();
        row.price = values.price;
        row.category = values.category.clone();
        row.updated_at = Utc::now().max(row.updated_at + TimeDelta::microseconds(1));

        Ok(1)
    }

    async fn delete(&self, id: i32) -> StoreResult<u64> {
        let mut table = self.table.write().await;
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn values(name: &str) -> ProductValues {
        ProductValues {
            name: name.to_string(),
            description: None,
            price: Decimal::new(100, 2),
            category: "Tools".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = InMemoryProductStore::new();
        let first = store.insert(&values("a")).await.unwrap();
        assert_eq!(store.delete(first.id).await.unwrap(), 1);

        let second = store.insert(&values("b")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_find_range_is_ordered_by_id() {
        let store = InMemoryProductStore::new();
        for name in ["a", "b", "c", "d"] {
            store.insert(&values(name)).await.unwrap();
        }

        let rows = store.find_range(2, 1).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["b", "c"]);

        assert!(store.find_range(10, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_row_signals_row_not_found() {
        let store = InMemoryProductStore::new();
        assert!(matches!(
            store.find_one(42).await,
            Err(StoreError::RowNotFound)
        ));
        assert_eq!(store.update(42, &values("x")).await.unwrap(), 0);
        assert_eq!(store.delete(42).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_moves_updated_at_forward() {
        let store = InMemoryProductStore::new();
        let inserted = store.insert(&values("a")).await.unwrap();

        store.update(inserted.id, &values("b")).await.unwrap();
        let once = store.find_one(inserted.id).await.unwrap();
        store.update(inserted.id, &values("c")).await.unwrap();
        let twice = store.find_one(inserted.id).await.unwrap();

        assert_eq!(once.created_at, inserted.created_at);
        assert!(once.updated_at > inserted.updated_at);
        assert!(twice.updated_at > once.updated_at);
        assert_eq!(twice.name, "c");
    }
}
