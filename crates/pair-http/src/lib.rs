//! pair-http: HTTP/TLS server for the pairing console
//!
//! Single place where HTTP/TLS handling lives. The web crate builds an
//! axum `Router` and hands it to `HttpServer`, which terminates TLS
//! (rustls, user-supplied PEM files) and applies the shared middleware
//! stack (CORS, tracing, compression).

pub mod middleware;
pub mod server;
pub mod tls;

// Re-export main types
pub use middleware::{MiddlewareConfig, MiddlewareStack};
pub use server::{HttpServer, HttpServerBuilder, ServerConfig};
pub use tls::{TlsConfig, TlsMode};

// Re-export axum for convenience - the web crate uses this
pub use axum;
pub use tower;
pub use tower_http;

/// Error types for the HTTP server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("TLS configuration error: {0}")]
    TlsError(String),

    #[error("Server binding error: {0}")]
    BindError(#[from] std::io::Error),

    #[error("Certificate error: {0}")]
    CertificateError(String),
}

pub type Result<T> = std::result::Result<T, ServerError>;
