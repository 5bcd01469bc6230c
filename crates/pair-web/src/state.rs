//! Application state shared across all handlers

use std::time::Instant;
use tokio::sync::Mutex;

use pair_chip::Commissioner;
use pair_registry::RegistryStore;

use crate::config::ServiceConfig;

/// Application state shared across all handlers.
///
/// The registry store sits behind a mutex that handlers hold across the
/// whole load-modify-save sequence; two concurrent pair/unpair requests
/// cannot interleave their read-modify-write cycles.
pub struct AppState {
    pub config: ServiceConfig,
    pub registry: Mutex<RegistryStore>,
    pub commissioner: Commissioner,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        let registry = Mutex::new(RegistryStore::new(&config.devices_path));
        let commissioner =
            Commissioner::new(config.chip_tool_path.as_str(), config.storage_path.as_str());
        Self {
            config,
            registry,
            commissioner,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
