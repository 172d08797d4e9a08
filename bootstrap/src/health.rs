//! 健康检查模块
//!
//! 提供无需认证的 /health 端点

use accounts_adapter_postgres::check_connection;
use accounts_telemetry::HealthStatus;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::Infrastructure;

/// 健康检查路由
pub fn health_routes(infra: Infrastructure) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(infra)
}

/// 执行依赖检查
pub async fn check_health(infra: &Infrastructure) -> HealthStatus {
    let mut status = HealthStatus::new();

    match infra.postgres_pool() {
        Some(pool) => match check_connection(&pool).await {
            Ok(()) => status.add_check("postgres", true, None),
            Err(e) => status.add_check("postgres", false, Some(e.message().to_string())),
        },
        None => status.add_check("storage", true, Some("in-memory".to_string())),
    }

    status
}

async fn health_check(State(infra): State<Infrastructure>) -> (StatusCode, Json<HealthStatus>) {
    let status = check_health(&infra).await;
    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}
