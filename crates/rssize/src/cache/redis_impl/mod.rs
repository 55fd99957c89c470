//! Redis cache backend implementation.
//!
//! Provides a shared page cache for multi-instance deployments. Expiry is
//! delegated to Redis (`SET EX`).

mod cache;
mod error;

pub use cache::RedisCache;
