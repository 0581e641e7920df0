use axum::Json;
use axum::http::StatusCode;

pub mod accounts;
pub mod clients;

/// Bare JSON string for a delete outcome: 200 when a row went away, 400 otherwise.
fn delete_response(
    deleted: bool,
    success: &'static str,
    failure: &'static str,
) -> (StatusCode, Json<&'static str>) {
    if deleted {
        (StatusCode::OK, Json(success))
    } else {
        tracing::warn!(message = failure, "delete reported no change");
        (StatusCode::BAD_REQUEST, Json(failure))
    }
}
