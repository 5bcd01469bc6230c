//! Startup console announce
//!
//! Prints the resolved configuration and a scannable QR code for the
//! service URL so a phone can open the pairing page directly.

use qrcode::render::unicode;
use qrcode::QrCode;
use tracing::warn;

use crate::config::ServiceConfig;

/// Best-effort non-loopback IPv4 of this host.
///
/// The UDP connect sends no packets; it only asks the kernel which
/// source address would route toward a public destination.
pub fn local_ipv4() -> String {
    let probe = || -> std::io::Result<std::net::SocketAddr> {
        let socket = std::net::UdpSocket::bind("0.0.0.0:0")?;
        socket.connect("8.8.8.8:80")?;
        socket.local_addr()
    };
    match probe() {
        Ok(addr) if !addr.ip().is_loopback() => addr.ip().to_string(),
        _ => "unknown".to_string(),
    }
}

/// The URL the announce advertises.
pub fn service_url(config: &ServiceConfig) -> String {
    let scheme = if config.tls_enabled { "https" } else { "http" };
    format!("{}://{}:{}", scheme, local_ipv4(), config.port)
}

/// Print the startup summary and QR code to the terminal.
pub fn print_startup(config: &ServiceConfig) {
    println!("matter2mqtt pairing tool");
    println!("Devices file: {}", config.devices_path);
    println!("Storage path: {}", config.storage_path);
    println!("chip-tool: {}", config.chip_tool_path);
    println!();
    println!("Scan to open:");

    let url = service_url(config);
    match QrCode::new(url.as_bytes()) {
        Ok(code) => {
            let rendered = code
                .render::<unicode::Dense1x2>()
                .quiet_zone(true)
                .build();
            println!("{}", rendered);
        }
        Err(e) => warn!("could not render QR code: {}", e),
    }

    println!();
    println!("Or point your browser to {}", url);
    if !config.tls_enabled {
        println!("Note: Camera requires HTTPS on iOS (use --tls)");
    }
}
