//! 领域层

pub mod product;
pub mod repositories;

pub use product::{ProductDraft, ProductId, ProductRecord, ProductValidationError};
