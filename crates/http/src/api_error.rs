//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses carrying the message envelope.
//! The error's own message text is always what the caller sees.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bankapi_service::ServiceError;

use crate::MessageResponse;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"message": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request, malformed parameter or rejected field.
    BadRequest(String),
    /// 404 Not Found, client or account doesn't exist.
    NotFound(String),
    /// 500 Internal Server Error, database or runtime failure.
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::Internal(msg) => msg,
        };
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %message, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), %message, "request rejected");
        }
        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        if err.is_not_found() {
            Self::NotFound(message)
        } else if err.is_client_fault() {
            Self::BadRequest(message)
        } else {
            Self::Internal(message)
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use bankapi_storage::StorageError;

    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::BadParameter("p".to_owned()), StatusCode::BAD_REQUEST),
            (ServiceError::AddClient("a".to_owned()), StatusCode::BAD_REQUEST),
            (ServiceError::UpdateClient("u".to_owned()), StatusCode::BAD_REQUEST),
            (ServiceError::AddAccount("a".to_owned()), StatusCode::BAD_REQUEST),
            (ServiceError::UpdateAccount("u".to_owned()), StatusCode::BAD_REQUEST),
            (StorageError::ClientNotFound("c".to_owned()).into(), StatusCode::NOT_FOUND),
            (StorageError::AccountNotFound("a".to_owned()).into(), StatusCode::NOT_FOUND),
            (StorageError::database("d").into(), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn database_message_is_kept() {
        let err = ApiError::from(ServiceError::from(StorageError::database(
            "Couldn't add a client to the database",
        )));
        assert!(matches!(err, ApiError::Internal(ref m) if m == "Couldn't add a client to the database"));
    }
}
