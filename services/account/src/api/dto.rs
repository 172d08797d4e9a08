//! 请求与响应结构

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Account, AccountDraft};

/// 创建、更新请求体
///
/// 缺失或为 null 的字段按空字符串处理，交由校验报告
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountRequest {
    /// 忽略，ID 由存储或路径决定
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub document: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
}

impl From<AccountRequest> for AccountDraft {
    fn from(request: AccountRequest) -> Self {
        AccountDraft::new(request.name, request.document, request.phone)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 账户响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Option<i64>,
    pub name: String,
    pub document: String,
    pub phone: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.map(|id| id.0),
            name: account.name,
            document: account.document,
            phone: account.phone,
        }
    }
}

/// `GET /accounts` 查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub document: Option<String>,
}
