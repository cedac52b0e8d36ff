//! In-process result cache.

use chrono::{DateTime, Duration, Utc};
use std::sync::{PoisonError, RwLock};

use crate::traits::cache::{CacheEntry, ResultCache};

/// Default time-to-live: one hour.
pub const DEFAULT_TTL_SECS: i64 = 60 * 60;

/// Single-slot cache holding only the most recent result.
///
/// A lookup hits when the slot holds the same query and is younger than the
/// TTL. Data is lost on restart.
pub struct MemoryCache<T> {
    slot: RwLock<Option<CacheEntry<T>>>,
    ttl: Duration,
}

impl<T> Default for MemoryCache<T> {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_TTL_SECS))
    }
}

impl<T> MemoryCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<T: Clone> MemoryCache<T> {
    /// Lookup as of `now`.
    pub fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<CacheEntry<T>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .filter(|entry| entry.query == key && now - entry.stored_at < self.ttl)
            .cloned()
    }
}

impl<T: Clone + Send + Sync> ResultCache<T> for MemoryCache<T> {
    fn get(&self, key: &str) -> Option<CacheEntry<T>> {
        self.get_at(key, Utc::now())
    }

    fn set(&self, key: &str, mut entry: CacheEntry<T>) {
        entry.query = key.to_string();
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(entry);
    }
}
