//! Account Service - 账户服务入口

use std::sync::Arc;

use accounts_adapter_postgres::MigrationManager;
use accounts_auth_core::CredentialStore;
use accounts_bootstrap::{Infrastructure, run_http_server};
use accounts_config::DatabaseDriver;
use accounts_errors::{AppError, AppResult};
use account_service::domain::AccountRepository;
use account_service::infrastructure::persistence::{
    InMemoryAccountRepository, PostgresAccountRepository, account_migrations,
};
use account_service::{AccountService, AppState, router};
use axum::Router;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_http_server("config", |infra: Infrastructure| async move {
        info!("Initializing Account Service...");

        let repository = build_repository(&infra).await?;
        let credentials = CredentialStore::from_config(&infra.config().security)?;
        info!(users = credentials.len(), realm = %credentials.realm(), "Credential store loaded");

        let state = AppState::new(AccountService::new(repository), credentials);
        Ok::<Router, AppError>(router(state))
    })
    .await
}

async fn build_repository(infra: &Infrastructure) -> AppResult<Arc<dyn AccountRepository>> {
    let database = &infra.config().database;

    match database.driver {
        DatabaseDriver::Postgres => {
            let pool = infra.require_postgres_pool()?;

            if database.run_migrations {
                let report = MigrationManager::new(pool.clone())
                    .migrate(&account_migrations())
                    .await?;
                info!(applied = report.applied_count(), "Account migrations checked");
            }

            Ok(Arc::new(PostgresAccountRepository::new(pool)))
        }
        DatabaseDriver::Memory => {
            info!("Using in-memory account store");
            Ok(Arc::new(InMemoryAccountRepository::new()))
        }
    }
}
