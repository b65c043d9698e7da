//! Permissive CORS for the public API.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Allows any origin with the GET and POST methods and the headers browsers
/// send for JSON requests.
///
/// The service exposes no credentials or per-user state, so the wildcard
/// origin is safe here.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
}
