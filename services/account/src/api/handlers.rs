//! 账户 HTTP 处理器

use accounts_errors::{AppError, AppResult};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::info;

use crate::api::auth::AuthIdentity;
use crate::api::dto::{AccountRequest, AccountResponse, ListQuery};
use crate::api::state::AppState;
use crate::domain::{Account, AccountId, Lookup};

fn account_id(path: Result<Path<i64>, PathRejection>) -> AppResult<AccountId> {
    let Path(id) = path.map_err(|e| AppError::validation(e.body_text()))?;
    Ok(AccountId(id))
}

fn request_body(body: Result<Json<AccountRequest>, JsonRejection>) -> AppResult<AccountRequest> {
    let Json(request) = body.map_err(|e| AppError::validation(e.body_text()))?;
    Ok(request)
}

fn not_found(id: AccountId) -> AppError {
    AppError::not_found(format!("Account not found: {}", id))
}

/// GET /accounts
pub async fn list_accounts(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<Vec<AccountResponse>>> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let accounts: Vec<Account> = match query.document {
        Some(document) => state
            .service
            .get_by_document(&document)
            .await?
            .into_option()
            .into_iter()
            .collect(),
        None => state.service.get_all().await?,
    };

    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// GET /accounts/{id}
pub async fn get_account(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<AccountResponse>> {
    let id = account_id(path)?;

    match state.service.get_by_id(id).await? {
        Lookup::Found(account) => Ok(Json(account.into())),
        Lookup::NotFound => Err(not_found(id)),
    }
}

/// POST /accounts
pub async fn create_account(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    body: Result<Json<AccountRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<AccountResponse>)> {
    let request = request_body(body)?;
    let account = state.service.create(request.into()).await?;

    info!(account_id = ?account.id, by = %identity.username, "Create account request handled");
    Ok((StatusCode::CREATED, Json(account.into())))
}

/// PUT /accounts/{id}
pub async fn update_account(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<AccountRequest>, JsonRejection>,
) -> AppResult<Json<AccountResponse>> {
    let id = account_id(path)?;
    let request = request_body(body)?;

    match state.service.update(id, request.into()).await? {
        Lookup::Found(account) => {
            info!(account_id = %id, by = %identity.username, "Update account request handled");
            Ok(Json(account.into()))
        }
        Lookup::NotFound => Err(not_found(id)),
    }
}

/// DELETE /accounts/{id}
pub async fn delete_account(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = account_id(path)?;
    state.service.delete(id).await?;

    info!(account_id = %id, by = %identity.username, "Delete account request handled");
    Ok(StatusCode::OK)
}
