//! Key-value store implementations.
//!
//! - [`RedisStore`] - production Redis backend with atomic `SET NX EX`
//! - [`MemoryStore`] - in-process TTL map for tests and local development

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
