//! Health check endpoints.
//!
//! - `/` - Plain "OK" for uptime monitors
//! - `/hello` - Plain "Hello World" greeting
//! - `/livez` - Basic liveness probe (immediate 200, no checks)

use axum::http::StatusCode;

/// GET / - Returns "OK".
#[axum::debug_handler]
pub async fn root() -> &'static str {
    "OK"
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does not touch the cache, storage or upstream.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /hello - Returns "Hello World".
#[axum::debug_handler]
pub async fn hello() -> &'static str {
    "Hello World"
}
