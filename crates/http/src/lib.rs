//! HTTP API server for bankapi.

#![allow(clippy::missing_errors_doc, reason = "Handlers surface errors through ApiError")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod blocking;
mod handlers;
mod query_types;
mod response_types;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{Router, routing::get};
use bankapi_service::{AccountService, ClientService};
use bankapi_storage::Database;
use tower_http::trace::TraceLayer;

pub use api_error::ApiError;
pub use query_types::AccountQuery;
pub use response_types::MessageResponse;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    pub client_service: Arc<ClientService>,
    pub account_service: Arc<AccountService>,
}

impl AppState {
    /// Build both services over the same connection provider.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self {
            client_service: Arc::new(ClientService::new(db.clone())),
            account_service: Arc::new(AccountService::new(db)),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/clients",
            get(handlers::clients::list_clients).post(handlers::clients::add_client),
        )
        .route(
            "/clients/{id}",
            get(handlers::clients::get_client)
                .put(handlers::clients::update_client)
                .delete(handlers::clients::delete_client),
        )
        .route(
            "/clients/{clientid}/accounts",
            get(handlers::accounts::list_accounts).post(handlers::accounts::add_account),
        )
        .route(
            "/clients/{clientid}/accounts/{accountid}",
            get(handlers::accounts::get_account)
                .put(handlers::accounts::update_account)
                .delete(handlers::accounts::delete_account),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
