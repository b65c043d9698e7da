//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{id}`     - Short link redirect (public)
//! - `GET  /health`   - Health check: store connectivity (public)
//! - `GET  /api`      - Single URL shorten
//! - `POST /api/bulk` - Bulk shorten (1-50 URLs)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **CORS** - Permissive, mirroring the public nature of the API
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    bulk_shorten_handler, health_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = Router::new()
        .route("/", get(shorten_handler))
        .route("/bulk", post(bulk_shorten_handler));

    let router = Router::new()
        .route("/{id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(cors::layer())
        .layer(rate_limit::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
