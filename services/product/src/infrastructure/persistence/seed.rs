//! 示例数据

use rust_decimal::Decimal;
use tracing::info;

use super::rows::ProductValues;
use super::store::ProductStore;
use crate::error::StoreResult;

pub fn seed_products() -> Vec<ProductValues> {
    vec![
        ProductValues {
            name: "Laptop Pro X".to_string(),
            description: Some("High performance laptop with 16GB RAM and 512GB SSD.".to_string()),
            price: Decimal::new(120_050, 2),
            category: "Electronics".to_string(),
        },
        ProductValues {
            name: "Mechanical Keyboard".to_string(),
            description: Some("Clicky keys for the best typing experience.".to_string()),
            price: Decimal::new(9_999, 2),
            category: "Electronics".to_string(),
        },
        ProductValues {
            name: "Ergonomic Chair".to_string(),
            description: Some("Comfortable chair for long working hours.".to_string()),
            price: Decimal::new(35_000, 2),
            category: "Furniture".to_string(),
        },
    ]
}

/// 表为空时写入示例数据，返回写入的行数
pub async fn seed_if_empty(store: &dyn ProductStore) -> StoreResult<usize> {
    if !store.find_range(1, 0).await?.is_empty() {
        return Ok(0);
    }

    info!("Seeding initial product data...");
    let products = seed_products();
    for values in &products {
        store.insert(values).await?;
    }
    info!(count = products.len(), "Initial product data seeded");

    Ok(products.len())
}
