//! 内存账户仓储
//!
//! 无数据库时使用（测试、本地运行）

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use accounts_errors::{AppError, AppResult};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Account, AccountId, AccountRepository, Lookup};

pub struct InMemoryAccountRepository {
    accounts: RwLock<BTreeMap<AccountId, Account>>,
    sequence: AtomicI64,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    fn next_id(&self) -> AccountId {
        AccountId(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, mut account: Account) -> AppResult<Account> {
        let mut accounts = self.accounts.write().await;

        let id = match account.id {
            Some(id) if accounts.contains_key(&id) => id,
            Some(id) => return Err(AppError::not_found(format!("Account not found: {}", id))),
            None => self.next_id(),
        };
        account.id = Some(id);

        accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn find_all(&self) -> AppResult<Vec<Account>> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: AccountId) -> AppResult<Lookup<Account>> {
        Ok(self.accounts.read().await.get(&id).cloned().into())
    }

    async fn find_by_document(&self, document: &str) -> AppResult<Lookup<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.document == document)
            .cloned()
            .into())
    }

    async fn delete(&self, account: &Account) -> AppResult<()> {
        if let Some(id) = account.id {
            self.accounts.write().await.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountDraft;

    fn anderson() -> Account {
        Account::new(AccountDraft::new("Anderson", "111234121234", "11978651234"))
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryAccountRepository::new();
        let first = repo.save(anderson()).await.unwrap();
        let second = repo.save(anderson()).await.unwrap();

        assert_eq!(first.id, Some(AccountId(1)));
        assert_eq!(second.id, Some(AccountId(2)));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_save_with_id_replaces_record() {
        let repo = InMemoryAccountRepository::new();
        let saved = repo.save(anderson()).await.unwrap();
        let id = saved.id.unwrap();

        let updated = Account {
            name: "Anderson Updated".into(),
            ..saved
        };
        repo.save(updated).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().into_option().unwrap();
        assert_eq!(found.name, "Anderson Updated");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_fails() {
        let repo = InMemoryAccountRepository::new();

        let err = repo
            .save(Account { id: Some(AccountId(10)), ..anderson() })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.message(), "Account not found: 10");
        assert!(repo.is_empty().await);

        // 失败的保存不消耗序列
        let next = repo.save(anderson()).await.unwrap();
        assert_eq!(next.id, Some(AccountId(1)));
    }

    #[tokio::test]
    async fn test_save_after_delete_does_not_resurrect() {
        let repo = InMemoryAccountRepository::new();
        let saved = repo.save(anderson()).await.unwrap();
        repo.delete(&saved).await.unwrap();

        assert!(repo.save(saved).await.is_err());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = InMemoryAccountRepository::new();
        for _ in 0..3 {
            repo.save(anderson()).await.unwrap();
        }
        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![AccountId(1), AccountId(2), AccountId(3)]);
    }

    #[tokio::test]
    async fn test_find_by_document_returns_lowest_id() {
        let repo = InMemoryAccountRepository::new();
        repo.save(anderson()).await.unwrap();
        repo.save(anderson()).await.unwrap();

        let found = repo.find_by_document("111234121234").await.unwrap();
        assert_eq!(found.into_option().and_then(|a| a.id), Some(AccountId(1)));

        let missing = repo.find_by_document("00000000000").await.unwrap();
        assert_eq!(missing, Lookup::NotFound);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = InMemoryAccountRepository::new();
        let saved = repo.save(anderson()).await.unwrap();

        repo.delete(&saved).await.unwrap();

        assert!(repo.is_empty().await);
        assert_eq!(repo.find_by_id(AccountId(1)).await.unwrap(), Lookup::NotFound);
    }
}
