//! Cache Store Module
//!
//! Main cache engine: a HashMap of entries behind a single reader/writer lock,
//! with lazy TTL expiration checked on read.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheEntry, CacheStats};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Cache ==
/// Thread-safe key-value cache with a uniform, optional TTL.
///
/// Every operation takes `&self`. The type is deliberately not `Clone`:
/// share one instance through `Arc<Cache<V>>` (or a plain reference) so that
/// all callers lock the same primitive.
///
/// Expired entries are never removed implicitly. They stop being returned
/// by [`Cache::get`] but stay in the map until [`Cache::del`] is called.
#[derive(Debug)]
pub struct Cache<V> {
    /// Key-value storage
    store: RwLock<HashMap<String, CacheEntry<V>>>,
    /// TTL applied on every set/replace, None = never expire
    ttl: Option<Duration>,
    /// Read hit/miss counters
    stats: StatsRecorder,
}

impl<V> Cache<V> {
    // == Constructor ==
    /// Creates an empty cache whose entries expire `ttl` after their last
    /// set or replace. A zero `ttl` disables expiration.
    pub fn new(ttl: Duration) -> Self {
        Self::with_ttl(Some(ttl))
    }

    /// Creates an empty cache whose entries never expire.
    pub fn without_expiry() -> Self {
        Self::with_ttl(None)
    }

    /// Creates an empty cache with an optional TTL. `Some(Duration::ZERO)`
    /// is treated the same as `None`.
    pub fn with_ttl(ttl: Option<Duration>) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            ttl: ttl.filter(|ttl| !ttl.is_zero()),
            stats: StatsRecorder::default(),
        }
    }

    /// Creates an empty cache using the TTL from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_ttl(config.ttl())
    }

    // == Set ==
    /// Inserts `value` under `key` only if the key is absent.
    ///
    /// Fails with [`CacheError::AlreadyExists`] when the key is present,
    /// even if its entry has expired; the existing entry is left untouched.
    pub fn set(&self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();
        let mut store = self.write();
        if store.contains_key(&key) {
            return Err(CacheError::AlreadyExists(key));
        }

        let entry = CacheEntry::new(value, self.ttl, Instant::now());
        store.insert(key, entry);
        Ok(())
    }

    // == Replace ==
    /// Overwrites the value under `key` only if the key is present.
    ///
    /// The expiration time is recomputed from now. Fails with
    /// [`CacheError::NotFound`] when the key is absent; no entry is created.
    pub fn replace(&self, key: &str, value: V) -> Result<()> {
        let mut store = self.write();
        match store.get_mut(key) {
            Some(slot) => {
                *slot = CacheEntry::new(value, self.ttl, Instant::now());
                Ok(())
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Delete ==
    /// Removes the entry under `key`.
    ///
    /// Fails with [`CacheError::NotFound`] when the key is absent.
    pub fn del(&self, key: &str) -> Result<()> {
        match self.write().remove(key) {
            Some(_) => Ok(()),
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Exist ==
    /// Reports whether `key` is present in the map.
    ///
    /// This is a membership check only and does not consult the expiration
    /// time: an expired entry that has not been deleted is reported as
    /// existing, even though [`Cache::get`] returns `None` for it.
    pub fn exist(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    // == TTL Remaining ==
    /// Returns the remaining lifetime of `key`.
    ///
    /// # Returns
    /// - `None` if the key is absent
    /// - `Some(None)` if the entry never expires
    /// - `Some(Some(Duration::ZERO))` if the entry has expired
    pub fn ttl_remaining(&self, key: &str) -> Option<Option<Duration>> {
        let now = Instant::now();
        self.read()
            .get(key)
            .map(|entry| entry.ttl_remaining_at(now))
    }

    /// Returns the TTL applied to entries, or None if they never expire.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    // == Length ==
    /// Returns the number of entries in the map, expired ones included.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    // == Is Empty ==
    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of read statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    // Every mutation is a single map operation, so a panic in another thread
    // cannot leave the map half-updated and a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> Cache<V> {
    // == Get ==
    /// Returns a clone of the value under `key` if present and not expired.
    ///
    /// Returns `None` if the key is missing or its entry has expired. An
    /// expired entry is left in place.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let store = self.read();
        match store.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self::without_expiry()
    }
}
