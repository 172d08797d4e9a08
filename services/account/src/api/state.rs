use accounts_auth_core::CredentialStore;

use crate::application::AccountService;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub service: AccountService,
    pub credentials: CredentialStore,
}

impl AppState {
    pub fn new(service: AccountService, credentials: CredentialStore) -> Self {
        Self {
            service,
            credentials,
        }
    }
}
