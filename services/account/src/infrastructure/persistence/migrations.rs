//! 账户表迁移

use accounts_adapter_postgres::Migration;

const CREATE_ACCOUNTS: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id       BIGSERIAL PRIMARY KEY,
    name     TEXT NOT NULL,
    document TEXT NOT NULL,
    phone    TEXT NOT NULL
);
"#;

const INDEX_ACCOUNTS_DOCUMENT: &str = r#"
CREATE INDEX IF NOT EXISTS idx_accounts_document ON accounts (document);
"#;

/// 账户服务的全部迁移，按版本排列
pub fn account_migrations() -> Vec<Migration> {
    vec![
        Migration::new(1, "create_accounts", CREATE_ACCOUNTS),
        Migration::new(2, "index_accounts_document", INDEX_ACCOUNTS_DOCUMENT),
    ]
}
