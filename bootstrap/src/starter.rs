//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use accounts_config::AppConfig;
use accounts_errors::AppResult;
use axum::{Router, middleware};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::health::health_routes;
use crate::infrastructure::Infrastructure;
use crate::metrics::{MetricsRecorder, metrics_routes, track_http_requests};
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 启动顺序：
/// 1. 加载配置
/// 2. 初始化日志
/// 3. 安装 Prometheus recorder
/// 4. 创建基础设施资源（数据库连接池带重试）
/// 5. 调用 `router_builder` 构建业务路由
/// 6. 挂载 /health、/metrics，启动服务并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use accounts_bootstrap::run_http_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http_server("config", |infra| async move {
///         Ok(my_routes(infra.require_postgres_pool()?))
///     })
///     .await
/// }
/// ```
pub async fn run_http_server<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;

    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    let metrics = Arc::new(MetricsRecorder::install()?);

    let infra = Infrastructure::from_config(config.clone()).await?;

    let app = router_builder(infra.clone())
        .await?
        .route_layer(middleware::from_fn(track_http_requests))
        .merge(health_routes(infra))
        .merge(metrics_routes(metrics))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}
