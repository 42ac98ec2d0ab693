//! Key-Value Store Implementations
//!
//! ## Available Stores
//!
//! | Store | Type | Description |
//! |-------|------|-------------|
//! | [`InMemoryStore`] | Local | Concurrent in-process map, for tests and single-node use |
//! | [`RedisStore`] | Distributed | Redis-backed, shared by many processes |
//!
//! ## Store Selection Guide
//!
//! - **Development/Testing**: Use `InMemoryStore`
//! - **Multi Instance**: Use `RedisStore`; locks only exclude processes that share the same Redis node

#[cfg(feature = "store-memory")]
pub mod in_memory;
#[cfg(feature = "store-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "store-memory")]
pub use in_memory::InMemoryStore;
#[cfg(feature = "store-redis")]
pub use redis::RedisStore;
