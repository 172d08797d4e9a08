//! accounts-auth-core - 认证核心库
//!
//! HTTP Basic 凭证解析、角色与基于配置的用户校验

mod credentials;
mod password;
mod role;
mod store;

pub use credentials::*;
pub use password::*;
pub use role::*;
pub use store::*;
