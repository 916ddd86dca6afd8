//! Cacher Trait
//!
//! The cache operation set as a trait, so drivers can be written against
//! any implementation.

use crate::cache::Cache;
use crate::error::Result;

/// Uniqueness-checked writes and expiration-aware reads over string keys.
pub trait Cacher<V>: Send + Sync {
    /// Inserts only if `key` is absent.
    fn set(&self, key: String, value: V) -> Result<()>;
    /// Overwrites only if `key` is present.
    fn replace(&self, key: &str, value: V) -> Result<()>;
    /// Returns the value if present and not expired.
    fn get(&self, key: &str) -> Option<V>;
    /// Removes `key` if present.
    fn del(&self, key: &str) -> Result<()>;
    /// Membership check, ignores expiry.
    fn exist(&self, key: &str) -> bool;
}

impl<V: Clone + Send + Sync> Cacher<V> for Cache<V> {
    fn set(&self, key: String, value: V) -> Result<()> {
        Cache::set(self, key, value)
    }

    fn replace(&self, key: &str, value: V) -> Result<()> {
        Cache::replace(self, key, value)
    }

    fn get(&self, key: &str) -> Option<V> {
        Cache::get(self, key)
    }

    fn del(&self, key: &str) -> Result<()> {
        Cache::del(self, key)
    }

    fn exist(&self, key: &str) -> bool {
        Cache::exist(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    fn exercise(cache: &dyn Cacher<u32>) {
        cache.set("a".to_string(), 1).unwrap();
        assert!(cache.exist("a"));
        assert_eq!(cache.get("a"), Some(1));
        cache.replace("a", 2).unwrap();
        assert_eq!(cache.get("a"), Some(2));
        cache.del("a").unwrap();
        assert_eq!(cache.del("a"), Err(CacheError::NotFound("a".to_string())));
    }

    #[test]
    fn test_cache_through_trait_object() {
        let cache: Cache<u32> = Cache::without_expiry();
        exercise(&cache);
    }
}
