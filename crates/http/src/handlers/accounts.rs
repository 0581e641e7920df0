use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use bankapi_core::{ACCOUNT_DELETE_FAILED_MESSAGE, ACCOUNT_DELETED_MESSAGE, Account, AccountInput};

use super::delete_response;
use crate::blocking::{blocking_json, blocking_result};
use crate::{AccountQuery, ApiError, AppState};

type AccountPath = Result<Path<(String, String)>, PathRejection>;

/// Lists a client's accounts, narrowed by whichever amount bounds are present.
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<AccountQuery>, QueryRejection>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let Path(client_id) = path?;
    let Query(query) = query?;
    let clients = Arc::clone(&state.client_service);
    let accounts = Arc::clone(&state.account_service);
    blocking_json(move || {
        clients.get_client_by_id(&client_id)?;
        match (query.amount_greater_than, query.amount_less_than) {
            (Some(gt), Some(lt)) => accounts.list_accounts_between(&client_id, &gt, &lt),
            (None, Some(lt)) => accounts.list_accounts_less_than(&client_id, &lt),
            (Some(gt), None) => accounts.list_accounts_greater_than(&client_id, &gt),
            (None, None) => accounts.list_accounts(&client_id),
        }
    })
    .await
}

pub async fn get_account(
    State(state): State<Arc<AppState>>,
    path: AccountPath,
) -> Result<Json<Account>, ApiError> {
    let Path((client_id, account_id)) = path?;
    let clients = Arc::clone(&state.client_service);
    let accounts = Arc::clone(&state.account_service);
    blocking_json(move || {
        clients.get_client_by_id(&client_id)?;
        accounts.get_account_by_id(&client_id, &account_id)
    })
    .await
}

pub async fn add_account(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<AccountInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let Path(client_id) = path?;
    let Json(input) = payload?;
    let clients = Arc::clone(&state.client_service);
    let accounts = Arc::clone(&state.account_service);
    let account = blocking_result(move || {
        clients.get_client_by_id(&client_id)?;
        accounts.add_account(&client_id, input)
    })
    .await?;
    tracing::info!(account_id = account.id, client_id = account.client_id, "account created");
    Ok((StatusCode::CREATED, Json(account)))
}

/// Replaces an account's type and amount; the account must be reachable
/// through the given client before the update runs.
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    path: AccountPath,
    payload: Result<Json<AccountInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let Path((client_id, account_id)) = path?;
    let Json(input) = payload?;
    let accounts = Arc::clone(&state.account_service);
    let account = blocking_result(move || {
        accounts.get_account_by_id(&client_id, &account_id)?;
        accounts.update_account(&client_id, &account_id, input)
    })
    .await?;
    tracing::info!(account_id = account.id, client_id = account.client_id, "account updated");
    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    path: AccountPath,
) -> Result<(StatusCode, Json<&'static str>), ApiError> {
    let Path((client_id, account_id)) = path?;
    let accounts = Arc::clone(&state.account_service);
    let (owner, id) = (client_id.clone(), account_id.clone());
    let deleted = blocking_result(move || accounts.delete_account(&owner, &id)).await?;
    if deleted {
        tracing::info!(%account_id, %client_id, "account deleted");
    }
    Ok(delete_response(deleted, ACCOUNT_DELETED_MESSAGE, ACCOUNT_DELETE_FAILED_MESSAGE))
}
