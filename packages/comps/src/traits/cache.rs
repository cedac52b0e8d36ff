//! Result cache collaborator.
//!
//! The pipeline itself never reads or writes the cache; the request layer
//! decides whether to serve a cached result and stores fresh ones.

use chrono::{DateTime, Utc};

/// A cached result for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub query: String,
    pub value: T,
    pub stored_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(query: impl Into<String>, value: T) -> Self {
        Self {
            query: query.into(),
            value,
            stored_at: Utc::now(),
        }
    }

    pub fn stored_at(mut self, at: DateTime<Utc>) -> Self {
        self.stored_at = at;
        self
    }
}

/// Keyed result storage with its own expiry policy.
pub trait ResultCache<T>: Send + Sync {
    /// A live entry for `key`, if any.
    fn get(&self, key: &str) -> Option<CacheEntry<T>>;

    fn set(&self, key: &str, entry: CacheEntry<T>);
}
