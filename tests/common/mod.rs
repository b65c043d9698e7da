#![allow(dead_code)]

use std::sync::Arc;

use shortly::infrastructure::store::MemoryStore;
use shortly::state::AppState;

pub const BASE_URL: &str = "http://sho.rt";

/// Builds an [`AppState`] backed by an in-memory store.
///
/// The concrete store handle is returned alongside so tests can seed or
/// inspect entries directly.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), BASE_URL.to_string());
    (state, store)
}
