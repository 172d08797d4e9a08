//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出与 HTTP 请求指标

use std::sync::Arc;
use std::time::Instant;

use accounts_errors::{AppError, AppResult};
use accounts_telemetry::init_metrics;
use axum::{
    Router,
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusHandle;

/// Metrics 记录器
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus recorder，进程内只能调用一次
    pub fn install() -> AppResult<Self> {
        let handle = init_metrics().map_err(|e| {
            AppError::internal(format!("Failed to install Prometheus recorder: {}", e))
        })?;
        Ok(Self { handle })
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// /metrics 路由
pub fn metrics_routes(recorder: Arc<MetricsRecorder>) -> Router {
    Router::new()
        .route("/metrics", get(render_metrics))
        .with_state(recorder)
}

async fn render_metrics(State(recorder): State<Arc<MetricsRecorder>>) -> String {
    recorder.render()
}

/// 记录 HTTP 请求
pub fn record_http_request(method: &str, path: &str, status: u16, duration_ms: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_ms", &labels).record(duration_ms);
}

/// HTTP 请求指标中间件
///
/// 使用路由模板（如 `/accounts/{id}`）作为标签，避免标签基数膨胀
pub async fn track_http_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = match request.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_string(),
        None => request.uri().path().to_string(),
    };

    let response = next.run(request).await;

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    response
}
