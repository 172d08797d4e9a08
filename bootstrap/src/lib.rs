//! accounts-bootstrap - 统一服务启动骨架
//!
//! 配置加载、日志、指标、数据库连接池与 HTTP 服务生命周期

mod health;
mod infrastructure;
mod metrics;
mod retry;
mod runtime;
mod starter;

pub use health::*;
pub use infrastructure::*;
pub use metrics::*;
pub use retry::*;
pub use runtime::*;
pub use starter::*;
