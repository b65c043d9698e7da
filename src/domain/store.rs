//! Key-value store abstraction with TTL semantics.

use async_trait::async_trait;

/// Errors surfaced by key-value store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend cannot be reached.
    #[error("store connection error: {0}")]
    Unavailable(String),

    /// The backend rejected or failed an individual command.
    #[error("store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// TTL-capable key-value backend holding all persisted mappings.
///
/// The store is the system of record: unlike a cache, errors propagate to the
/// caller instead of degrading silently. Implementations must be thread-safe;
/// concurrent bulk fan-out calls [`set_if_absent`](Self::set_if_absent) from
/// many tasks against the same shared handle and relies on its atomicity for
/// first-writer-wins semantics.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store
/// - [`crate::infrastructure::store::MemoryStore`] - in-process store for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Atomically stores `value` under `key` with a `ttl_seconds` expiry,
    /// only if `key` is not already present.
    ///
    /// Must be a single atomic operation against the backend - never a
    /// check-then-set pair. A `ttl_seconds` of zero stores without expiry.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the write happened
    /// - `Ok(false)` if the key pre-existed (existing value and TTL untouched)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend is unreachable or the command
    /// fails.
    async fn set_if_absent(&self, key: &str, value: &str, ttl_seconds: u64) -> StoreResult<bool>;

    /// Retrieves the value stored under `key` without touching its TTL.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key is present and unexpired
    /// - `Ok(None)` if the key never existed or already expired (the backend
    ///   does not distinguish the two)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend is unreachable or the command
    /// fails.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Backend connectivity probe used by the health endpoint.
    async fn health_check(&self) -> bool;
}
