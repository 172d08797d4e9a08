//! 基础设施资源管理

use accounts_adapter_postgres::{PostgresConfig, create_pool};
use accounts_config::{AppConfig, DatabaseDriver};
use accounts_errors::{AppError, AppResult};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化后交给服务构建路由
#[derive(Clone)]
pub struct Infrastructure {
    config: AppConfig,
    /// `database.driver = "memory"` 时为空
    postgres_pool: Option<PgPool>,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let postgres_pool = match config.database.driver {
            DatabaseDriver::Postgres => {
                let url = config.database.url.as_ref().ok_or_else(|| {
                    AppError::internal("database.url is required for the postgres driver")
                })?;
                let pg_config = PostgresConfig::new(url.expose_secret())
                    .with_max_connections(config.database.max_connections);

                let pool = with_retry(&RetryConfig::default(), "PostgreSQL connection", || {
                    let cfg = pg_config.clone();
                    async move { create_pool(&cfg).await }
                })
                .await?;
                info!(
                    "PostgreSQL connection pool created (max_connections: {})",
                    config.database.max_connections
                );
                Some(pool)
            }
            DatabaseDriver::Memory => {
                info!("Using in-memory storage, no database connection");
                None
            }
        };

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    /// 不连接任何外部资源（内存存储）
    pub fn in_memory(config: AppConfig) -> Self {
        Self {
            config,
            postgres_pool: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// PostgreSQL 连接池，内存模式下为 `None`
    pub fn postgres_pool(&self) -> Option<PgPool> {
        self.postgres_pool.clone()
    }

    /// 获取连接池，内存模式下返回错误
    pub fn require_postgres_pool(&self) -> AppResult<PgPool> {
        self.postgres_pool()
            .ok_or_else(|| AppError::internal("PostgreSQL pool is not configured"))
    }
}
