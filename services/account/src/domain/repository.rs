//! 账户仓储接口

use accounts_errors::AppResult;
use async_trait::async_trait;

use super::account::{Account, AccountId, Lookup};

/// 账户仓储接口
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// 保存账户：无 ID 时插入，有 ID 时更新，返回带 ID 的记录
    async fn save(&self, account: Account) -> AppResult<Account>;

    /// 列出所有账户
    async fn find_all(&self) -> AppResult<Vec<Account>>;

    /// 根据 ID 查找账户
    async fn find_by_id(&self, id: AccountId) -> AppResult<Lookup<Account>>;

    /// 根据证件号查找账户（多条时取 ID 最小的）
    async fn find_by_document(&self, document: &str) -> AppResult<Lookup<Account>>;

    /// 删除账户
    async fn delete(&self, account: &Account) -> AppResult<()>;
}
