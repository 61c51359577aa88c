//! HTTP 服务启动

use std::time::Duration;

use axum::{Router, http::StatusCode};
use catalog_config::ServerConfig;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::runtime::shutdown_signal;

/// 为路由加上通用中间件：请求追踪与请求超时
///
/// 超时后请求 future 被丢弃，其中正在执行的数据库查询随之取消。
pub fn with_http_layers(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
}

/// 运行 HTTP 服务，直到收到关闭信号
pub async fn serve_http(config: &ServerConfig, router: Router) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!(%addr, "HTTP server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");
    Ok(())
}
