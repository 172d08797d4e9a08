//! 基于配置的用户凭证存储

use std::collections::HashMap;
use std::sync::Arc;

use accounts_config::SecurityConfig;
use accounts_errors::{AppError, AppResult};
use secrecy::ExposeSecret;
use tracing::{debug, info};

use crate::{BasicCredentials, HashedPassword, Role};

/// 认证通过的身份，由认证中间件放入请求扩展
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: Role,
}

#[derive(Debug)]
struct UserEntry {
    username: String,
    password_hash: HashedPassword,
    role: Role,
}

/// 未知用户时参与校验的哈希，参数与配置中的用户哈希一致，
/// 未知用户与密码错误的校验耗时相同
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=4096,t=3,p=1$By6bvZsQNrB63Szfaq7AUA$rtvWzbvKdJdLHGk0oI0rXGxgR8ohv2ans65Fu5RpsLo";

/// 用户凭证存储
///
/// 启动时从配置加载，运行期只读。用户名按小写比较。
#[derive(Debug, Clone)]
pub struct CredentialStore {
    realm: String,
    users: Arc<HashMap<String, UserEntry>>,
    dummy: HashedPassword,
}

impl CredentialStore {
    /// 从 `(username, password_hash, role)` 列表构建
    pub fn new<I>(realm: impl Into<String>, users: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, HashedPassword, Role)>,
    {
        let mut map = HashMap::new();

        for (username, password_hash, role) in users {
            let key = username.to_lowercase();
            if map.contains_key(&key) {
                return Err(AppError::internal(format!(
                    "Duplicate user in security config: {}",
                    username
                )));
            }
            map.insert(
                key,
                UserEntry {
                    username,
                    password_hash,
                    role,
                },
            );
        }

        Ok(Self {
            realm: realm.into(),
            users: Arc::new(map),
            dummy: HashedPassword::from_hash(DUMMY_HASH)?,
        })
    }

    /// 从安全配置构建，哈希或角色非法时启动失败
    pub fn from_config(config: &SecurityConfig) -> AppResult<Self> {
        let users = config
            .users
            .iter()
            .map(|user| {
                let password_hash = HashedPassword::from_hash(user.password_hash.expose_secret())
                    .map_err(|e| {
                        AppError::internal(format!("User {}: {}", user.username, e.message()))
                    })?;
                let role: Role = user.role.parse()?;
                Ok((user.username.clone(), password_hash, role))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let store = Self::new(config.realm.clone(), users)?;
        info!(users = store.len(), realm = %store.realm, "Credential store loaded");
        Ok(store)
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// 校验凭证，返回对应身份
    ///
    /// 用户不存在时仍对固定哈希执行一次校验
    pub fn authenticate(&self, credentials: &BasicCredentials) -> AppResult<Identity> {
        let entry = self.users.get(&credentials.username.to_lowercase());
        let verified = self
            .password_hash_for(entry)
            .verify(credentials.password());

        match entry {
            Some(entry) if verified => Ok(Identity {
                username: entry.username.clone(),
                role: entry.role,
            }),
            Some(_) => {
                debug!(username = %credentials.username, "Password mismatch");
                Err(AppError::unauthenticated("Bad credentials"))
            }
            None => {
                debug!(username = %credentials.username, "Unknown user");
                Err(AppError::unauthenticated("Bad credentials"))
            }
        }
    }

    fn password_hash_for<'a>(&'a self, entry: Option<&'a UserEntry>) -> &'a HashedPassword {
        entry.map_or(&self.dummy, |entry| &entry.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_password;
    use accounts_config::UserConfig;
    use secrecy::Secret;

    fn user(username: &str, password: &str, role: Role) -> (String, HashedPassword, Role) {
        let hash = HashedPassword::from_hash(hash_password(password).unwrap()).unwrap();
        (username.to_string(), hash, role)
    }

    #[test]
    fn test_authenticate_both_roles() {
        let store = CredentialStore::new(
            "accounts",
            vec![
                user("Anderson", "anderson", Role::User),
                user("admin", "administrator", Role::Admin),
            ],
        )
        .unwrap();

        let identity = store
            .authenticate(&BasicCredentials::new("Anderson", "anderson"))
            .unwrap();
        assert_eq!(identity.username, "Anderson");
        assert_eq!(identity.role, Role::User);

        let identity = store
            .authenticate(&BasicCredentials::new("admin", "administrator"))
            .unwrap();
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn test_username_is_case_insensitive() {
        let store =
            CredentialStore::new("accounts", vec![user("Anderson", "anderson", Role::User)])
                .unwrap();

        let identity = store
            .authenticate(&BasicCredentials::new("anderson", "anderson"))
            .unwrap();
        assert_eq!(identity.username, "Anderson");
    }

    #[test]
    fn test_rejects_wrong_password_and_unknown_user() {
        let store =
            CredentialStore::new("accounts", vec![user("admin", "administrator", Role::Admin)])
                .unwrap();

        let err = store
            .authenticate(&BasicCredentials::new("admin", "anderson"))
            .unwrap_err();
        assert_eq!(err.status_code(), 401);

        let err = store
            .authenticate(&BasicCredentials::new("nobody", "administrator"))
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn test_unknown_user_is_verified_against_dummy_hash() {
        let store =
            CredentialStore::new("accounts", vec![user("admin", "administrator", Role::Admin)])
                .unwrap();

        let unknown = store.users.get("nobody");
        assert_eq!(store.password_hash_for(unknown).as_str(), DUMMY_HASH);

        let known = store.users.get("admin");
        assert_ne!(store.password_hash_for(known).as_str(), DUMMY_HASH);

        // 固定哈希可解析，且任何口令都无法通过
        assert!(!store.dummy.verify("administrator"));
        assert!(!store.dummy.verify(""));
    }

    #[test]
    fn test_dummy_hash_uses_configured_cost() {
        // 与 config/default.toml 中的哈希参数一致
        let configured = "$argon2id$v=19$m=4096,t=3,p=1$";
        assert!(DUMMY_HASH.starts_with(configured));
    }

    #[test]
    fn test_rejects_duplicate_users() {
        let result = CredentialStore::new(
            "accounts",
            vec![
                user("admin", "one", Role::Admin),
                user("ADMIN", "two", Role::User),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_config() {
        let config = SecurityConfig {
            realm: "test-realm".to_string(),
            users: vec![UserConfig {
                username: "admin".to_string(),
                password_hash: Secret::new(hash_password("administrator").unwrap()),
                role: "ADMIN".to_string(),
            }],
        };

        let store = CredentialStore::from_config(&config).unwrap();
        assert_eq!(store.realm(), "test-realm");
        assert_eq!(store.len(), 1);
        assert!(
            store
                .authenticate(&BasicCredentials::new("admin", "administrator"))
                .is_ok()
        );
    }

    #[test]
    fn test_from_config_rejects_bad_hash_and_role() {
        let bad_hash = SecurityConfig {
            realm: "accounts".to_string(),
            users: vec![UserConfig {
                username: "admin".to_string(),
                password_hash: Secret::new("administrator".to_string()),
                role: "ADMIN".to_string(),
            }],
        };
        assert!(CredentialStore::from_config(&bad_hash).is_err());

        let bad_role = SecurityConfig {
            realm: "accounts".to_string(),
            users: vec![UserConfig {
                username: "admin".to_string(),
                password_hash: Secret::new(hash_password("administrator").unwrap()),
                role: "SUPERUSER".to_string(),
            }],
        };
        assert!(CredentialStore::from_config(&bad_role).is_err());
    }
}
