//! API request handlers

pub mod devices;
pub mod health;
pub mod pair;
pub mod unpair;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

/// Standard error body: `{"status":"error","message":...}`
pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({
            "status": "error",
            "message": message.into(),
        })),
    )
}

/// Malformed request bodies answer 400 with the rejection text.
pub(crate) fn bad_request(rejection: JsonRejection) -> (StatusCode, Json<Value>) {
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}
