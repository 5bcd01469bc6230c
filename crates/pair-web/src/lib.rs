//! pair-web: the matter2mqtt pairing console
//!
//! Serves the pairing web page and a small JSON API (pair, unpair,
//! list). Commissioning is delegated to chip-tool via `pair-chip`;
//! successful operations are recorded in the `devices.yaml` registry
//! that the matter2mqtt bridge reads on its next restart.

pub mod announce;
pub mod assets;
pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{Cli, ServiceConfig};
pub use routes::create_router;
pub use state::AppState;
