//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::store::KeyValueStore;

/// Handles shared by all request handlers.
///
/// Both fields are cheap clones of `Arc`s; the state itself carries no
/// mutable data. The store handle appears alongside the service so the
/// health endpoint can probe the backend directly.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    /// Builds the state around a store handle and the public host used for
    /// short URLs.
    pub fn new(store: Arc<dyn KeyValueStore>, base_url: String) -> Self {
        Self {
            shortener: Arc::new(ShortenerService::new(store.clone(), base_url)),
            store,
        }
    }
}
