//! account-service - 账户管理服务
//!
//! 提供账户的增删改查 REST 接口，HTTP Basic 认证

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use api::{AppState, router};
pub use application::AccountService;
pub use error::{AccountError, AccountResult};
