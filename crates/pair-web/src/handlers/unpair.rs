//! Unpair Handler

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use pair_chip::classify_unpair_failure;

use super::{bad_request, error_response};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UnpairRequest {
    pub node_id: u64,
}

/// POST|DELETE /api/unpair - Unpair a device and drop it from devices.yaml
pub async fn unpair_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UnpairRequest>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection),
    };

    info!("unpairing node {}", req.node_id);

    let outcome = state.commissioner.unpair(req.node_id).await;
    if !outcome.success {
        error!("chip-tool unpair failed for node {}", req.node_id);
        error!(
            "Command: {} pairing unpair {} --storage-directory {}",
            state.commissioner.chip_tool(),
            req.node_id,
            state.config.storage_path
        );
        error!("Output:\n{}", outcome.output);
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            classify_unpair_failure(&outcome.output),
        );
    }

    let store = state.registry.lock().await;

    let mut registry = match store.load() {
        Ok(registry) => registry,
        Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    if !registry.remove(req.node_id) {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("Device {} not found in devices.yaml", req.node_id),
        );
    }

    if let Err(e) = store.save(&registry) {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": format!(
                "Device {} unpaired and removed from {}. Restart matter2mqtt to apply changes.",
                req.node_id,
                store.path().display()
            ),
        })),
    )
}
