//! HTTP Basic 凭证

use accounts_errors::{AppError, AppResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use secrecy::{ExposeSecret, Secret};

const BASIC_SCHEME: &str = "basic";

/// 从 `Authorization` 头解析出的用户名/密码
#[derive(Debug)]
pub struct BasicCredentials {
    pub username: String,
    password: Secret<String>,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    /// 解析 `Basic <base64(username:password)>`
    pub fn from_header(value: &str) -> AppResult<Self> {
        let (scheme, encoded) = value
            .trim()
            .split_once(' ')
            .ok_or_else(|| AppError::unauthenticated("Malformed authorization header"))?;

        if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
            return Err(AppError::unauthenticated(
                "Unsupported authorization scheme",
            ));
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AppError::unauthenticated("Invalid basic credentials encoding"))?;
        let decoded = String::from_utf8(decoded)
            .map_err(|_| AppError::unauthenticated("Invalid basic credentials encoding"))?;

        // 密码允许包含 ':'，只按第一个分隔
        let (username, password) = decoded
            .split_once(':')
            .ok_or_else(|| AppError::unauthenticated("Malformed basic credentials"))?;

        if username.is_empty() {
            return Err(AppError::unauthenticated("Missing username"));
        }

        Ok(Self::new(username, password))
    }

    /// 编码为 `Authorization` 头的值
    pub fn to_header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password.expose_secret());
        format!("Basic {}", STANDARD.encode(raw))
    }

    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}
