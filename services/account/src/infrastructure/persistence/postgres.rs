//! PostgreSQL 账户仓储实现

use accounts_errors::{AppError, AppResult};
use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Account, AccountId, AccountRepository, Lookup};
use crate::infrastructure::observability::StoreTimer;

/// 将 sqlx 错误转换为 AppError
fn map_sqlx_error(e: sqlx::Error) -> AppError {
    AppError::database(e.to_string())
}

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, account: &Account) -> AppResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (name, document, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, document, phone
            "#,
        )
        .bind(&account.name)
        .bind(&account.document)
        .bind(&account.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn update(&self, id: AccountId, account: &Account) -> AppResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts
            SET name = $2, document = $3, phone = $4
            WHERE id = $1
            RETURNING id, name, document, phone
            "#,
        )
        .bind(id.0)
        .bind(&account.name)
        .bind(&account.document)
        .bind(&account.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        // 查询和更新之间被并发删除
        row.map(Account::from)
            .ok_or_else(|| AppError::not_found(format!("Account not found: {}", id)))
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn save(&self, account: Account) -> AppResult<Account> {
        let _timer = StoreTimer::new("save");
        match account.id {
            Some(id) => self.update(id, &account).await,
            None => self.insert(&account).await,
        }
    }

    async fn find_all(&self) -> AppResult<Vec<Account>> {
        let _timer = StoreTimer::new("find_all");
        let rows = sqlx::query_as::<_, AccountRow>(
            "SELECT id, name, document, phone FROM accounts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Account::from).collect())
    }

    async fn find_by_id(&self, id: AccountId) -> AppResult<Lookup<Account>> {
        let _timer = StoreTimer::new("find_by_id");
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, name, document, phone FROM accounts WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Account::from).into())
    }

    async fn find_by_document(&self, document: &str) -> AppResult<Lookup<Account>> {
        let _timer = StoreTimer::new("find_by_document");
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, document, phone FROM accounts
            WHERE document = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(document)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Account::from).into())
    }

    async fn delete(&self, account: &Account) -> AppResult<()> {
        let Some(id) = account.id else {
            return Ok(());
        };

        let _timer = StoreTimer::new("delete");
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    name: String,
    document: String,
    phone: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: Some(AccountId(row.id)),
            name: row.name,
            document: row.document,
            phone: row.phone,
        }
    }
}
