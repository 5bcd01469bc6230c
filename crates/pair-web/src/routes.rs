//! API routes

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::assets;
use crate::handlers;
use crate::state::AppState;

/// Create the complete router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/pair", post(handlers::pair::pair_handler))
        .route(
            "/api/unpair",
            post(handlers::unpair::unpair_handler).delete(handlers::unpair::unpair_handler),
        )
        .route("/api/devices", get(handlers::devices::list_devices_handler))
        .route("/api/health", get(handlers::health::health_handler))
        .with_state(state)
        // Everything else is the embedded pairing page.
        .fallback(assets::static_handler)
}
