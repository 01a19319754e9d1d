//! Size- and age-bounded result cache.
//!
//! [`ResultCache`] maps normalized query keys to previously computed results
//! so repeated requests skip the remote call. The whole cache lives under one
//! storage key as a JSON object `{ key: { result, timestamp } }`.
//!
//! # Bounds
//! - **TTL**: entries older than [`CACHE_TTL_DAYS`] days are dropped on the
//!   next write
//! - **Capacity**: at most [`CACHE_CAPACITY`] entries survive a write; the
//!   entry just written plus the most recently stored of the rest
//!
//! Stale entries are removed before the size trim, so they never take a slot
//! from a fresh entry. Reads never refresh an entry's timestamp.
//!
//! # Failure Handling
//! The cache is best-effort. Unreadable state reads as empty and failed
//! writes are logged; neither is reported to the caller.

use crate::core::clock::Clock;
use crate::core::storage::{load_json, save_json, Storage};
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

pub const CACHE_CAPACITY: usize = 100;
pub const CACHE_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    #[serde(rename = "result")]
    pub payload: T,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub stored_at: DateTime<Utc>,
}

/// Case-fold and trim a raw key so equivalent inputs share one entry.
pub fn normalize_key(raw_key: &str) -> String {
    raw_key.trim().to_lowercase()
}

/// Key for a request that also depends on a discriminator such as the tone.
pub fn cache_key(input: &str, discriminator: impl Display) -> String {
    format!(
        "{}:{}",
        discriminator.to_string().to_lowercase(),
        normalize_key(input)
    )
}

pub struct ResultCache<T> {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    namespace: String,
    _payload: PhantomData<fn() -> T>,
}

impl<T> ResultCache<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn new(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            clock,
            namespace: namespace.into(),
            _payload: PhantomData,
        }
    }

    pub fn lookup(&self, raw_key: &str) -> Option<T> {
        let key = normalize_key(raw_key);
        let hit = self.load().remove(&key).map(|entry| entry.payload);

        if hit.is_some() {
            log::debug!("Cache hit in '{}' for '{key}'", self.namespace);
        } else {
            log::debug!("Cache miss in '{}' for '{key}'", self.namespace);
        }
        hit
    }

    pub fn store(&self, raw_key: &str, payload: T) {
        let key = normalize_key(raw_key);
        let now = self.clock.now();
        let ttl = Duration::days(CACHE_TTL_DAYS);

        let mut entries = self.load();

        let before = entries.len();
        entries.retain(|_, entry| now.signed_duration_since(entry.stored_at) < ttl);
        if entries.len() < before {
            log::debug!(
                "Dropped {} expired entries from '{}'",
                before - entries.len(),
                self.namespace
            );
        }

        entries.remove(&key);
        if entries.len() >= CACHE_CAPACITY {
            // The entry being written always survives, even when older
            // entries carry the same or a later timestamp.
            let mut newest_first: Vec<_> = entries.into_iter().collect();
            newest_first.sort_by(|(_, a), (_, b)| b.stored_at.cmp(&a.stored_at));
            newest_first.truncate(CACHE_CAPACITY - 1);
            entries = newest_first.into_iter().collect();
        }

        entries.insert(
            key,
            CacheEntry {
                payload,
                stored_at: now,
            },
        );

        if let Err(e) = save_json(self.storage.as_ref(), &self.namespace, &entries) {
            log::error!("Cache save failed for '{}' (continuing): {e}", self.namespace);
        }
    }

    /// Number of entries currently persisted, expired ones included.
    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load(&self) -> BTreeMap<String, CacheEntry<T>> {
        match load_json(self.storage.as_ref(), &self.namespace) {
            Ok(Some(entries)) => entries,
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                log::warn!("Cache load failed for '{}', starting empty: {e}", self.namespace);
                BTreeMap::new()
            }
        }
    }
}
