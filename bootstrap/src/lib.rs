//! catalog-bootstrap - 统一服务启动骨架
//!
//! 日志初始化、HTTP 中间件与带 graceful shutdown 的服务循环

mod runtime;
mod server;

pub use runtime::*;
pub use server::*;
