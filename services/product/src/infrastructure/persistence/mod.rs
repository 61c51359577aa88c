//! Persistence implementations

mod converters;
mod memory;
mod postgres;
mod repository;
mod rows;
mod seed;
mod store;

pub use converters::{record_from_row, values_from_draft};
pub use memory::InMemoryProductStore;
pub use postgres::{PRODUCT_SCHEMA, PgProductStore};
pub use repository::ProductRepositoryImpl;
pub use rows::{ProductRow, ProductValues};
pub use seed::{seed_if_empty, seed_products};
pub use store::ProductStore;
