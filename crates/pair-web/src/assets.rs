//! Embedded front-end bundle
//!
//! The pairing page ships inside the binary so the service has no
//! filesystem dependency at runtime.

use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

pub const INDEX_HTML: &str = include_str!("../static/index.html");
pub const APP_JS: &str = include_str!("../static/app.js");
pub const STYLE_CSS: &str = include_str!("../static/style.css");

/// Fallback handler serving the embedded bundle. Unknown paths get the
/// index page so a bookmarked URL still lands on the console.
pub async fn static_handler(uri: Uri) -> Response {
    match uri.path() {
        "/app.js" => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/javascript")],
            APP_JS,
        )
            .into_response(),
        "/style.css" => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/css")],
            STYLE_CSS,
        )
            .into_response(),
        _ => Html(INDEX_HTML).into_response(),
    }
}
