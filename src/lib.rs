//! # Shortly
//!
//! A TTL-based URL shortening service built with Axum and Redis.
//!
//! ## Architecture
//!
//! The crate follows a layered design with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - Core types and the [`domain::store::KeyValueStore`]
//!   abstraction
//! - **Application Layer** ([`application`]) - Workflow orchestration:
//!   single shorten, concurrent bulk pipeline, resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory
//!   store implementations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Deterministic short codes: the same URL always maps to the same
//!   7-character identifier, so re-shortening is idempotent
//! - Atomic first-writer-wins collision handling via `SET NX EX`
//! - Concurrent bulk shortening (1-50 URLs) with per-item error isolation
//! - Every mapping carries a TTL; expired links vanish without cleanup jobs
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export REDIS_URL="redis://localhost:6379"
//! export BASE_URL="https://sho.rt"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, ShortenError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{BulkOutcome, Shortened, ShortenRequest};
    pub use crate::domain::store::KeyValueStore;
    pub use crate::error::{AppError, ShortenError};
    pub use crate::state::AppState;
}
