//! Service configuration
//!
//! Each setting resolves as flag > env var > default, once at startup.

use clap::Parser;
use pair_core::config::{resolve_bool, resolve_port, resolve_string};

pub const DEFAULT_DEVICES_PATH: &str = "/etc/matter2mqtt/devices.yaml";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_STORAGE_PATH: &str = "/var/lib/matter2mqtt";
pub const DEFAULT_CHIP_TOOL: &str = "chip-tool";
pub const DEFAULT_CERT_FILE: &str = "cert.pem";
pub const DEFAULT_KEY_FILE: &str = "key.pem";

#[derive(Parser, Debug, Default)]
#[command(name = "matter2mqtt-pair")]
#[command(about = "Web pairing console for matter2mqtt")]
pub struct Cli {
    /// Path to devices.yaml
    #[arg(long)]
    pub devices: Option<String>,

    /// HTTP server port
    #[arg(long)]
    pub port: Option<u16>,

    /// chip-tool storage directory
    #[arg(long)]
    pub storage: Option<String>,

    /// Path to chip-tool binary
    #[arg(long = "chip-tool")]
    pub chip_tool: Option<String>,

    /// Enable HTTPS
    #[arg(long)]
    pub tls: bool,

    /// TLS certificate file
    #[arg(long)]
    pub cert: Option<String>,

    /// TLS key file
    #[arg(long)]
    pub key: Option<String>,
}

/// Fully resolved runtime configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub devices_path: String,
    pub port: u16,
    pub storage_path: String,
    pub chip_tool_path: String,
    pub tls_enabled: bool,
    pub cert_path: String,
    pub key_path: String,
}

impl ServiceConfig {
    /// Resolve the final configuration from CLI flags, environment
    /// variables and built-in defaults.
    pub fn resolve(cli: Cli) -> Self {
        Self {
            devices_path: resolve_string(cli.devices, "DEVICES_YAML", DEFAULT_DEVICES_PATH),
            port: resolve_port(cli.port, "PORT", DEFAULT_PORT),
            storage_path: resolve_string(cli.storage, "STORAGE_PATH", DEFAULT_STORAGE_PATH),
            chip_tool_path: resolve_string(cli.chip_tool, "CHIP_TOOL_PATH", DEFAULT_CHIP_TOOL),
            tls_enabled: resolve_bool(cli.tls, "TLS_ENABLED"),
            cert_path: resolve_string(cli.cert, "TLS_CERT", DEFAULT_CERT_FILE),
            key_path: resolve_string(cli.key, "TLS_KEY", DEFAULT_KEY_FILE),
        }
    }
}
