//! Device registry persistence
//!
//! The registry is the `devices.yaml` consumed by the matter2mqtt bridge:
//! a mapping from Matter node id to the bridge-side device configuration.
//! The file is read fully and rewritten fully on every mutation; callers
//! are expected to serialize read-modify-write cycles (the web layer holds
//! a mutex across them).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use pair_core::{Error, Result};

/// One device as the bridge sees it.
///
/// `sensitivity` and `debounce_ms` are bridge tuning knobs that other
/// tooling may have written; they are omitted from the document when
/// unset so a hand-edited file stays minimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub topic: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
}

impl DeviceEntry {
    /// Entry as created by a fresh pairing: topic only.
    pub fn with_topic(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            sensitivity: None,
            debounce_ms: None,
        }
    }
}

/// The persisted registry document: `devices:` keyed by node id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRegistry {
    #[serde(default)]
    pub devices: BTreeMap<u64, DeviceEntry>,
}

impl DeviceRegistry {
    /// Replace any existing entry for this node id wholesale.
    pub fn upsert(&mut self, node_id: u64, entry: DeviceEntry) {
        self.devices.insert(node_id, entry);
    }

    /// Remove an entry, reporting whether it existed.
    pub fn remove(&mut self, node_id: u64) -> bool {
        self.devices.remove(&node_id).is_some()
    }

    pub fn contains(&self, node_id: u64) -> bool {
        self.devices.contains_key(&node_id)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

/// On-disk store for the registry file.
///
/// Absence of the file is equivalent to an empty registry; a present but
/// malformed file is a parse error. There is no lock and no atomic
/// rename; the deployment is single-operator, single-process.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the registry file. Missing file means an empty registry.
    pub fn load(&self) -> Result<DeviceRegistry> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("registry file {} absent, starting empty", self.path.display());
                return Ok(DeviceRegistry::default());
            }
            Err(e) => {
                return Err(Error::ReadRegistry(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_yaml::from_str(&raw)
            .map_err(|e| Error::ParseRegistry(format!("{}: {}", self.path.display(), e)))
    }

    /// Serialize the full registry and overwrite the file.
    pub fn save(&self, registry: &DeviceRegistry) -> Result<()> {
        let raw = serde_yaml::to_string(registry)
            .map_err(|e| Error::WriteRegistry(format!("serialize: {}", e)))?;

        std::fs::write(&self.path, raw)
            .map_err(|e| Error::WriteRegistry(format!("{}: {}", self.path.display(), e)))
    }
}
