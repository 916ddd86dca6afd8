//! Cache Module
//!
//! Provides a thread-safe in-memory cache with lazy TTL expiration.

mod cacher;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use cacher::Cacher;
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::Cache;
