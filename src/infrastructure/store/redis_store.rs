//! Redis-backed key-value store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::store::{KeyValueStore, StoreError, StoreResult};

/// Redis implementation of [`KeyValueStore`].
///
/// Uses `ConnectionManager` so the same handle can be cloned cheaply into
/// every concurrent task. Errors propagate to the caller - this store is the
/// system of record for mappings, not a fail-open cache.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    /// Callers at startup treat this as fatal.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set_if_absent(&self, key: &str, value: &str, ttl_seconds: u64) -> StoreResult<bool> {
        let mut conn = self.client.clone();

        // SET NX [EX ttl] is one atomic command; EX 0 is rejected by Redis,
        // so a zero TTL stores without expiry.
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value).arg("NX");
        if ttl_seconds > 0 {
            cmd.arg("EX").arg(ttl_seconds);
        }

        let reply: Option<String> = cmd
            .query_async(&mut conn)
            .await
            .map_err(|e| StoreError::Operation(format!("SET NX failed: {}", e)))?;

        let wrote = reply.is_some();
        debug!("SET NX {} (TTL: {}s): wrote={}", key, ttl_seconds, wrote);
        Ok(wrote)
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| StoreError::Operation(format!("GET failed: {}", e)))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
