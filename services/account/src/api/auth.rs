//! HTTP Basic 认证中间件

use accounts_auth_core::{BasicCredentials, CredentialStore, Identity};
use accounts_errors::{AppError, AppResult};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::infrastructure::observability::record_authentication_failure;

/// 已认证身份提取器
///
/// 必须在 `basic_auth_middleware` 之后使用
pub struct AuthIdentity(pub Identity);

impl<S> FromRequestParts<S> for AuthIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthIdentity)
            .ok_or_else(|| AppError::unauthenticated("Missing identity in request extensions"))
    }
}

/// Basic 认证中间件
///
/// 校验 `Authorization` 头并将 `Identity` 放入请求扩展
pub async fn basic_auth_middleware(
    State(credentials): State<CredentialStore>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(&credentials, &request) {
        Ok(identity) => {
            debug!(username = %identity.username, role = %identity.role, "Request authenticated");
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) => {
            warn!(error = %e, path = %request.uri().path(), "Authentication failed");
            unauthorized(credentials.realm(), e)
        }
    }
}

fn authenticate(credentials: &CredentialStore, request: &Request) -> AppResult<Identity> {
    let Some(value) = request.headers().get(header::AUTHORIZATION) else {
        record_authentication_failure("missing");
        return Err(AppError::unauthenticated(
            "Full authentication is required to access this resource",
        ));
    };

    let value = value
        .to_str()
        .map_err(|_| AppError::unauthenticated("Malformed authorization header"))
        .and_then(BasicCredentials::from_header)
        .inspect_err(|_| record_authentication_failure("malformed"))?;

    credentials
        .authenticate(&value)
        .inspect_err(|_| record_authentication_failure("bad_credentials"))
}

fn unauthorized(realm: &str, error: AppError) -> Response {
    let mut response = error.into_response();
    let challenge = HeaderValue::from_str(&format!("Basic realm=\"{}\"", realm))
        .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, challenge);
    response
}
