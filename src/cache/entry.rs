//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Time of the insert or replace that produced this entry
    pub created_at: Instant,
    /// Expiration instant, None = never expires
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL; `None` produces an entry that never expires
    /// * `now` - Clock snapshot used as the insertion time
    ///
    /// A TTL so large that `now + ttl` overflows the clock is treated as
    /// no expiration.
    pub fn new(value: V, ttl: Option<Duration>, now: Instant) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: ttl.and_then(|ttl| now.checked_add(ttl)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// An entry is expired only once `now` is strictly past `expires_at`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining lifetime as of `now`, or None if the entry never expires.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` if the entry has expired
    /// - `Some(remaining)` if the entry has a TTL and hasn't expired
    /// - `None` if the entry never expires
    pub fn ttl_remaining_at(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(now))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new("test_value", None, now);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.created_at, now);
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired_at(now + Duration::from_secs(3600)));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new(42, Some(Duration::from_secs(60)), now);

        assert_eq!(entry.value, 42);
        assert_eq!(entry.expires_at, Some(now + Duration::from_secs(60)));
        assert!(!entry.is_expired_at(now));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let ttl = Duration::from_millis(500);
        let entry = CacheEntry::new("v", Some(ttl), now);

        // Exactly at expires_at the entry is still live
        assert!(!entry.is_expired_at(now + ttl));
        assert!(entry.is_expired_at(now + ttl + Duration::from_nanos(1)));
    }

    #[test]
    fn test_ttl_remaining() {
        let now = Instant::now();
        let entry = CacheEntry::new("v", Some(Duration::from_secs(10)), now);

        assert_eq!(
            entry.ttl_remaining_at(now + Duration::from_secs(4)),
            Some(Duration::from_secs(6))
        );
        assert_eq!(
            entry.ttl_remaining_at(now + Duration::from_secs(11)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_ttl_remaining_no_expiration() {
        let entry = CacheEntry::new("v", None, Instant::now());
        assert!(entry.ttl_remaining_at(Instant::now()).is_none());
    }

    #[test]
    fn test_overflowing_ttl_never_expires() {
        let entry = CacheEntry::new("v", Some(Duration::MAX), Instant::now());
        assert!(entry.expires_at.is_none());
    }
}
