//! 账户应用服务
//!
//! 校验输入并编排仓储调用

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{Account, AccountDraft, AccountId, AccountRepository, Lookup, validate};
use crate::error::{AccountError, AccountResult};
use crate::infrastructure::observability::{
    Outcome, record_account_operation, record_validation_failure,
};

/// 账户服务
#[derive(Clone)]
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    /// 创建账户
    pub async fn create(&self, draft: AccountDraft) -> AccountResult<Account> {
        self.check("create", &draft)?;

        let account = self
            .repository
            .save(Account::new(draft))
            .await
            .inspect_err(|_| record_account_operation("create", Outcome::Error))?;

        record_account_operation("create", Outcome::Success);
        info!(account_id = ?account.id, "Account created");
        Ok(account)
    }

    /// 列出所有账户
    pub async fn get_all(&self) -> AccountResult<Vec<Account>> {
        let accounts = self
            .repository
            .find_all()
            .await
            .inspect_err(|_| record_account_operation("get_all", Outcome::Error))?;

        record_account_operation("get_all", Outcome::Success);
        debug!(count = accounts.len(), "Listed accounts");
        Ok(accounts)
    }

    /// 根据 ID 查找账户
    pub async fn get_by_id(&self, id: AccountId) -> AccountResult<Lookup<Account>> {
        let lookup = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|_| record_account_operation("get_by_id", Outcome::Error))?;

        record_account_operation("get_by_id", lookup_outcome(&lookup));
        Ok(lookup)
    }

    /// 根据证件号查找账户
    pub async fn get_by_document(&self, document: &str) -> AccountResult<Lookup<Account>> {
        let lookup = self
            .repository
            .find_by_document(document)
            .await
            .inspect_err(|_| record_account_operation("get_by_document", Outcome::Error))?;

        record_account_operation("get_by_document", lookup_outcome(&lookup));
        Ok(lookup)
    }

    /// 更新账户
    ///
    /// 账户不存在时返回 `Lookup::NotFound`，存在时按创建规则校验后整体替换字段
    pub async fn update(
        &self,
        id: AccountId,
        draft: AccountDraft,
    ) -> AccountResult<Lookup<Account>> {
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|_| record_account_operation("update", Outcome::Error))?;

        if let Lookup::NotFound = existing {
            record_account_operation("update", Outcome::NotFound);
            debug!(account_id = %id, "Account to update not found");
            return Ok(Lookup::NotFound);
        }

        self.check("update", &draft)?;

        let updated = self
            .repository
            .save(Account::with_id(id, draft))
            .await
            .inspect_err(|_| record_account_operation("update", Outcome::Error))?;

        record_account_operation("update", Outcome::Success);
        info!(account_id = %id, "Account updated");
        Ok(Lookup::Found(updated))
    }

    /// 删除账户，不存在时返回 `AccountError::IdNotFound`
    pub async fn delete(&self, id: AccountId) -> AccountResult<()> {
        let account = match self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|_| record_account_operation("delete", Outcome::Error))?
        {
            Lookup::Found(account) => account,
            Lookup::NotFound => {
                record_account_operation("delete", Outcome::NotFound);
                warn!(account_id = %id, "Attempted to delete missing account");
                return Err(AccountError::IdNotFound(id));
            }
        };

        self.repository
            .delete(&account)
            .await
            .inspect_err(|_| record_account_operation("delete", Outcome::Error))?;

        record_account_operation("delete", Outcome::Success);
        info!(account_id = %id, "Account deleted");
        Ok(())
    }

    fn check(&self, operation: &str, draft: &AccountDraft) -> AccountResult<()> {
        validate(draft).map_err(|e| {
            record_account_operation(operation, Outcome::Invalid);
            record_validation_failure(e.field().as_str());
            debug!(operation, error = %e, "Account rejected by validation");
            AccountError::from(e)
        })
    }
}

fn lookup_outcome<T>(lookup: &Lookup<T>) -> Outcome {
    if lookup.is_found() {
        Outcome::Success
    } else {
        Outcome::NotFound
    }
}
