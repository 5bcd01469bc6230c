//! TLS configuration from user-supplied PEM files
//!
//! Certificate provisioning is out of scope: the operator points the
//! service at an existing cert/key pair and we build a rustls acceptor
//! from them.

use crate::{Result, ServerError};
use rustls::ServerConfig as RustlsServerConfig;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio_rustls::TlsAcceptor;

/// TLS mode configuration
#[derive(Clone, Debug, Default)]
pub enum TlsMode {
    /// No TLS, HTTP only
    #[default]
    Disabled,
    /// TLS enabled with explicit certificate paths
    Enabled { cert_path: String, key_path: String },
}

/// TLS configuration
#[derive(Clone, Debug, Default)]
pub struct TlsConfig {
    pub mode: TlsMode,
}

impl TlsConfig {
    /// Create a new TLS config with explicit paths
    pub fn with_certs(cert_path: impl Into<String>, key_path: impl Into<String>) -> Self {
        Self {
            mode: TlsMode::Enabled {
                cert_path: cert_path.into(),
                key_path: key_path.into(),
            },
        }
    }

    /// Create a disabled TLS config (HTTP only)
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Check if TLS is enabled
    pub fn is_enabled(&self) -> bool {
        !matches!(self.mode, TlsMode::Disabled)
    }

    /// Build a TLS acceptor from this config
    pub fn build_acceptor(&self) -> Result<Option<TlsAcceptor>> {
        match &self.mode {
            TlsMode::Disabled => Ok(None),
            TlsMode::Enabled {
                cert_path,
                key_path,
            } => {
                let acceptor = create_tls_acceptor(cert_path, key_path)?;
                Ok(Some(acceptor))
            }
        }
    }
}

/// Create a TLS acceptor from certificate files
fn create_tls_acceptor(cert_path: &str, key_path: &str) -> Result<TlsAcceptor> {
    let cert_file = File::open(cert_path)
        .map_err(|e| ServerError::CertificateError(format!("Failed to open cert file: {}", e)))?;
    let key_file = File::open(key_path)
        .map_err(|e| ServerError::CertificateError(format!("Failed to open key file: {}", e)))?;

    let mut cert_reader = BufReader::new(cert_file);
    let mut key_reader = BufReader::new(key_file);

    let certs: Vec<_> = rustls_pemfile::certs(&mut cert_reader)
        .filter_map(|r| r.ok())
        .collect();

    let key = rustls_pemfile::private_key(&mut key_reader)
        .map_err(|e| ServerError::CertificateError(format!("Failed to read private key: {}", e)))?
        .ok_or_else(|| ServerError::CertificateError("No private key found".to_string()))?;

    if certs.is_empty() {
        return Err(ServerError::CertificateError(
            "No certificates found".to_string(),
        ));
    }

    let tls_config = RustlsServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .map_err(|e| ServerError::TlsError(format!("TLS config error: {}", e)))?;

    Ok(TlsAcceptor::from(Arc::new(tls_config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_disabled_builds_no_acceptor() {
        let config = TlsConfig::disabled();
        assert!(!config.is_enabled());
        assert!(config.build_acceptor().unwrap().is_none());
    }

    #[test]
    fn test_missing_cert_file_is_error() {
        let dir = TempDir::new().unwrap();
        let config = TlsConfig::with_certs(
            dir.path().join("cert.pem").to_string_lossy(),
            dir.path().join("key.pem").to_string_lossy(),
        );
        assert!(config.is_enabled());
        assert!(matches!(
            config.build_acceptor(),
            Err(ServerError::CertificateError(_))
        ));
    }

    #[test]
    fn test_empty_pem_is_error() {
        let dir = TempDir::new().unwrap();
        let cert = dir.path().join("cert.pem");
        let key = dir.path().join("key.pem");
        std::fs::write(&cert, "").unwrap();
        std::fs::write(&key, "").unwrap();

        let config =
            TlsConfig::with_certs(cert.to_string_lossy(), key.to_string_lossy());
        assert!(config.build_acceptor().is_err());
    }
}
