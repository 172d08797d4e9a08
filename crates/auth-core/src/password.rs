//! argon2 密码哈希

use std::fmt;

use accounts_errors::{AppError, AppResult};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// PHC 格式的 argon2 哈希
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// 从已有的哈希字符串创建（校验 PHC 格式）
    pub fn from_hash(hash: impl Into<String>) -> AppResult<Self> {
        let hash = hash.into();
        PasswordHash::new(&hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash: {}", e)))?;
        Ok(Self(hash))
    }

    /// 验证明文密码是否匹配
    pub fn verify(&self, plain_password: &str) -> bool {
        match PasswordHash::new(&self.0) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashedPassword([REDACTED])")
    }
}

/// 生成可以写进配置文件的 argon2id 哈希
pub fn hash_password(plain_password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plain_password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}
