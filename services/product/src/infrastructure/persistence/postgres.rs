//! PostgreSQL 记录存储实现

use async_trait::async_trait;
use catalog_adapter_postgres::SchemaStatement;
use sqlx::PgPool;

use super::rows::{ProductRow, ProductValues};
use super::store::ProductStore;
use crate::error::StoreResult;

/// products 表结构
///
/// 列宽与 `ProductDraft::validate` 的长度限制保持一致。
pub const PRODUCT_SCHEMA: &[SchemaStatement] = &[SchemaStatement {
    name: "create_products_table",
    sql: r#"
        CREATE TABLE IF NOT EXISTS products (
            id          INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            name        VARCHAR(255)   NOT NULL CHECK (btrim(name) <> ''),
            description VARCHAR(255),
            price       NUMERIC(10, 2) NOT NULL CHECK (price >= 0),
            category    VARCHAR(100)   NOT NULL CHECK (btrim(category) <> ''),
            created_at  TIMESTAMPTZ    NOT NULL DEFAULT NOW(),
            updated_at  TIMESTAMPTZ    NOT NULL DEFAULT NOW()
        )
    "#,
}];

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_range(&self, limit: i64, offset: i64) -> StoreResult<Vec<ProductRow>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, category, created_at, updated_at
            FROM products
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_one(&self, id: i32) -> StoreResult<ProductRow> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, category, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert(&self, values: &ProductValues) -> StoreResult<ProductRow> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, description, price, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, category, created_at, updated_at
            "#,
        )
        .bind(&values.name)
        .bind(&values.description)
        .bind(values.price)
        .bind(&values.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, values: &ProductValues) -> StoreResult<u64> {
        // clock_timestamp() 而非 NOW()：同一事务内多次更新也能前进
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = $1,
                description = $2,
                price = $3,
                category = $4,
                updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $5
            "#,
        )
        .bind(&values.name)
        .bind(&values.description)
        .bind(values.price)
        .bind(&values.category)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
