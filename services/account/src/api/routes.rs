use axum::{Router, middleware, routing::get};

use crate::api::auth::basic_auth_middleware;
use crate::api::handlers::{
    create_account, delete_account, get_account, list_accounts, update_account,
};
use crate::api::state::AppState;

/// 账户路由，所有路由都需要 Basic 认证
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        .route_layer(middleware::from_fn_with_state(
            state.credentials.clone(),
            basic_auth_middleware,
        ))
        .with_state(state)
}
