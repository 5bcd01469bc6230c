//! Device List Handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::error_response;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeviceListItem {
    pub node_id: u64,
    pub topic: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
}

/// GET /api/devices - List registered devices
pub async fn list_devices_handler(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<Value>) {
    let store = state.registry.lock().await;

    let registry = match store.load() {
        Ok(registry) => registry,
        Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    let devices: Vec<DeviceListItem> = registry
        .devices
        .into_iter()
        .map(|(node_id, entry)| DeviceListItem {
            node_id,
            topic: entry.topic,
            sensitivity: entry.sensitivity,
            debounce_ms: entry.debounce_ms,
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "devices": devices,
        })),
    )
}
