//! Pair Handler

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use pair_chip::classify_pair_failure;
use pair_registry::DeviceEntry;

use super::{bad_request, error_response};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PairRequest {
    pub code: String,
    pub name: String,
    pub node_id: u64,
}

/// POST /api/pair - Commission a device and record it in devices.yaml
pub async fn pair_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PairRequest>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection),
    };

    info!("pairing node {} as {:?}", req.node_id, req.name);

    let outcome = state.commissioner.pair(req.node_id, &req.code).await;
    if !outcome.success {
        error!("chip-tool pairing failed for node {}", req.node_id);
        error!(
            "Command: {} pairing code {} {} --storage-directory {}",
            state.commissioner.chip_tool(),
            req.node_id,
            req.code,
            state.config.storage_path
        );
        error!("Output:\n{}", outcome.output);
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            classify_pair_failure(&outcome.output),
        );
    }

    // Record the device. Held across the full load-modify-save cycle.
    let store = state.registry.lock().await;

    let mut registry = match store.load() {
        Ok(registry) => registry,
        Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    registry.upsert(req.node_id, DeviceEntry::with_topic(req.name.as_str()));

    if let Err(e) = store.save(&registry) {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": format!(
                "Device {} commissioned and added to {}. Restart matter2mqtt to activate.",
                req.node_id,
                store.path().display()
            ),
        })),
    )
}
