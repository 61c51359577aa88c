//! API layer - HTTP JSON 接口

mod handlers;
mod routes;

pub use routes::{AppState, router};
