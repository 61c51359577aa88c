//! 表结构初始化
//!
//! 只执行幂等的 DDL（`CREATE ... IF NOT EXISTS`），不记录版本，不支持回滚。

use catalog_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::info;

/// 一条命名的 DDL 语句
#[derive(Debug, Clone, Copy)]
pub struct SchemaStatement {
    pub name: &'static str,
    pub sql: &'static str,
}

/// 依次执行 DDL 语句
pub async fn apply_schema(pool: &PgPool, statements: &[SchemaStatement]) -> AppResult<()> {
    for statement in statements {
        sqlx::query(statement.sql)
            .execute(pool)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to apply schema '{}': {}", statement.name, e))
            })?;
        info!(name = statement.name, "Schema statement applied");
    }
    Ok(())
}
