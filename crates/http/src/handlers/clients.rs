use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use bankapi_core::{
    CLIENT_DELETE_FAILED_MESSAGE, CLIENT_DELETED_MESSAGE, Client, ClientInput, ClientSummary,
};

use super::delete_response;
use crate::blocking::{blocking_json, blocking_result};
use crate::{ApiError, AppState};

pub async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ClientSummary>>, ApiError> {
    let clients = Arc::clone(&state.client_service);
    blocking_json(move || clients.list_clients()).await
}

pub async fn get_client(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Client>, ApiError> {
    let Path(id) = path?;
    let clients = Arc::clone(&state.client_service);
    let accounts = Arc::clone(&state.account_service);
    blocking_json(move || {
        let client = clients.get_client_by_id(&id)?;
        Ok(client.with_accounts(accounts.list_accounts(&id)?))
    })
    .await
}

pub async fn add_client(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClientInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let Json(input) = payload?;
    let clients = Arc::clone(&state.client_service);
    let client = blocking_result(move || clients.add_client(input)).await?;
    tracing::info!(client_id = client.id, "client created");
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn update_client(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<ClientInput>, JsonRejection>,
) -> Result<Json<Client>, ApiError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let clients = Arc::clone(&state.client_service);
    let accounts = Arc::clone(&state.account_service);
    let client = blocking_result(move || {
        let client = clients.update_client(&id, input)?;
        Ok(client.with_accounts(accounts.list_accounts(&id)?))
    })
    .await?;
    tracing::info!(client_id = client.id, "client updated");
    Ok(Json(client))
}

pub async fn delete_client(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Json<&'static str>), ApiError> {
    let Path(id) = path?;
    let clients = Arc::clone(&state.client_service);
    let client_id = id.clone();
    let deleted = blocking_result(move || clients.delete_client(&client_id)).await?;
    if deleted {
        tracing::info!(client_id = %id, "client deleted");
    }
    Ok(delete_response(deleted, CLIENT_DELETED_MESSAGE, CLIENT_DELETE_FAILED_MESSAGE))
}
