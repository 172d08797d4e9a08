//! 账户实体

use std::fmt;

use serde::{Deserialize, Serialize};

/// 账户 ID，由存储在首次保存时分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// 账户字段（创建、更新时的输入）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDraft {
    pub name: String,
    pub document: String,
    pub phone: String,
}

impl AccountDraft {
    pub fn new(
        name: impl Into<String>,
        document: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
            phone: phone.into(),
        }
    }
}

/// 账户实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// 未持久化时为 `None`
    pub id: Option<AccountId>,
    pub name: String,
    pub document: String,
    pub phone: String,
}

impl Account {
    /// 尚未保存的新账户
    pub fn new(draft: AccountDraft) -> Self {
        Self {
            id: None,
            name: draft.name,
            document: draft.document,
            phone: draft.phone,
        }
    }

    /// 用已有 ID 和新字段组合出账户（更新时使用）
    pub fn with_id(id: AccountId, draft: AccountDraft) -> Self {
        Self {
            id: Some(id),
            ..Self::new(draft)
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// 查找结果
///
/// 显式区分“找到”和“不存在”，调用方必须处理两种情况
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn map<U, F>(self, f: F) -> Lookup<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}
