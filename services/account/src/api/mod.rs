//! HTTP 接口

pub mod auth;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use auth::{AuthIdentity, basic_auth_middleware};
pub use routes::router;
pub use state::AppState;
