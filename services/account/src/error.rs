use accounts_errors::AppError;
use thiserror::Error;

use crate::domain::{AccountId, ValidationError};

#[derive(Debug, Error)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Id not found: {0}")]
    IdNotFound(AccountId),
    #[error(transparent)]
    Store(#[from] AppError),
}

pub type AccountResult<T> = Result<T, AccountError>;

impl From<AccountError> for AppError {
    fn from(error: AccountError) -> Self {
        match error {
            AccountError::Validation(e) => AppError::Validation(e.to_string()),
            // 删除不存在的账户按内部错误处理
            AccountError::IdNotFound(_) => AppError::Internal(error.to_string()),
            AccountError::Store(e) => e,
        }
    }
}
