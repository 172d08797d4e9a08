//! Account Service Metrics
//!
//! 业务指标记录

use std::time::Instant;

use metrics::{counter, histogram};

/// 操作结果标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
    Invalid,
    Error,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::NotFound => "not_found",
            Outcome::Invalid => "invalid",
            Outcome::Error => "error",
        }
    }
}

/// 记录账户操作
pub fn record_account_operation(operation: &str, outcome: Outcome) {
    let labels = [
        ("operation", operation.to_string()),
        ("outcome", outcome.as_str().to_string()),
    ];
    counter!("account_operations_total", &labels).increment(1);
}

/// 记录校验失败的字段
pub fn record_validation_failure(field: &str) {
    let labels = [("field", field.to_string())];
    counter!("account_validation_failures_total", &labels).increment(1);
}

/// 记录认证失败
pub fn record_authentication_failure(reason: &str) {
    let labels = [("reason", reason.to_string())];
    counter!("account_auth_failures_total", &labels).increment(1);
}

/// 仓储调用计时器，drop 时记录耗时（成功和失败都记录）
pub struct StoreTimer {
    start: Instant,
    operation: &'static str,
}

impl StoreTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }
}

impl Drop for StoreTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64() * 1000.0;
        let labels = [("operation", self.operation.to_string())];
        histogram!("account_store_duration_ms", &labels).record(duration);
    }
}
