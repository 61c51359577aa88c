//! 应用层：线上表示与服务编排

pub mod dto;
pub mod mapping;
pub mod service;

pub use dto::{Product, ProductInput};
pub use service::ProductService;
