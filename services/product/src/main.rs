//! product-service - 商品目录 HTTP 服务

use std::sync::Arc;
use std::time::Duration;

use catalog_adapter_postgres::{PostgresConfig, apply_schema, check_connection, create_pool};
use catalog_bootstrap::{init_runtime, serve_http, with_http_layers};
use catalog_config::{AppConfig, DatabaseConfig};
use secrecy::ExposeSecret;
use tracing::info;

use product_service::api;
use product_service::application::ProductService;
use product_service::infrastructure::persistence::{
    InMemoryProductStore, PRODUCT_SCHEMA, PgProductStore, ProductRepositoryImpl, ProductStore,
    seed_if_empty,
};

/// 根据数据库配置选择记录存储
async fn build_store(
    config: &DatabaseConfig,
) -> Result<Arc<dyn ProductStore>, Box<dyn std::error::Error>> {
    if config.is_in_memory() {
        info!("Using in-memory product store");
        return Ok(Arc::new(InMemoryProductStore::new()));
    }

    let pg_config = PostgresConfig::new(config.url.expose_secret().clone())
        .with_max_connections(config.max_connections)
        .with_min_connections(config.min_connections)
        .with_connect_timeout(Duration::from_secs(config.connect_timeout_secs));

    let pool = create_pool(&pg_config).await?;
    check_connection(&pool).await?;
    info!("Database connection verified");

    if config.auto_migrate {
        apply_schema(&pool, PRODUCT_SCHEMA).await?;
    }

    Ok(Arc::new(PgProductStore::new(pool)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let config = AppConfig::load(&config_dir)?;
    init_runtime(&config);

    let store = build_store(&config.database).await?;
    if config.database.seed_on_empty {
        seed_if_empty(store.as_ref()).await?;
    }

    let repository = Arc::new(ProductRepositoryImpl::new(store));
    let service = Arc::new(ProductService::new(repository));
    info!("Product service initialized");

    let router = with_http_layers(api::router(service), &config.server);
    serve_http(&config.server, router).await?;

    Ok(())
}
