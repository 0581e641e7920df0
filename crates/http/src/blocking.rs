//! Helpers for running blocking service calls in async handlers.
//!
//! Services talk to `SQLite` synchronously, so every call is moved onto the
//! blocking pool. Join failures become a 500; service errors go through
//! `ApiError::from`.

use axum::Json;
use bankapi_service::ServiceError;
use serde::Serialize;
use tokio::task::spawn_blocking;

use crate::ApiError;

/// Runs a blocking closure and returns `Result<T, ApiError>`.
///
/// # Example
/// ```ignore
/// let client = blocking_result(move || clients.get_client_by_id(&id)).await?;
/// ```
pub async fn blocking_result<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| {
            tracing::error!("Join error: {}", e);
            ApiError::Internal("internal server error".to_owned())
        })?
        .map_err(ApiError::from)
}

/// Same as [`blocking_result`], wrapping the value in `Json`.
pub async fn blocking_json<T, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static + Serialize,
{
    blocking_result(f).await.map(Json)
}
