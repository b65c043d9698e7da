//! Business logic services.

mod shortener_service;

pub use shortener_service::{
    DEFAULT_BULK_TTL_SECONDS, MAX_BULK_URLS, MAX_TTL_SECONDS, ShortenerService,
};
