// src/catalog/cache.rs — TTL cache decorator over a coin provider

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::Value;

use super::types::CoinRecord;
use super::{CoinCatalog, CoinProvider};

const COIN_KEY_PREFIX: &str = "crypto_data_";
const LISTING_KEY: &str = "all_coins";

fn coin_key(id: &str) -> String {
    format!("{COIN_KEY_PREFIX}{}", id.to_lowercase())
}

/// Key-value cache with per-entry TTL. Implementations must be atomic at
/// single-key granularity; no multi-key transactions are required. Values are
/// plain JSON so an external store (redis and friends) can hold them.
pub trait CacheBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value, ttl: Duration);
    fn delete(&self, key: &str);
}

struct CacheSlot {
    value: Value,
    expires_at: Instant,
}

/// Process-local backend: a mutex-guarded map with lazy expiry on read.
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, CacheSlot>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheBackend for InMemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(key) {
            Some(slot) if slot.expires_at > Instant::now() => Some(slot.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheSlot {
                    value,
                    expires_at: Instant::now() + ttl,
                },
            );
        }
    }

    fn delete(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Caching decorator over the catalog.
///
/// The cache is advisory: undecodable entries and backend failures fall
/// through to the wrapped catalog without erroring. Absent coins are never
/// cached, so a freshly added coin is visible on its first uncached lookup.
pub struct CachedCatalog {
    catalog: Arc<CoinCatalog>,
    backend: Arc<dyn CacheBackend>,
    ttl: Duration,
}

impl CachedCatalog {
    pub fn new(catalog: Arc<CoinCatalog>, backend: Arc<dyn CacheBackend>, ttl: Duration) -> Self {
        Self {
            catalog,
            backend,
            ttl,
        }
    }

    /// Upsert into the wrapped catalog, then drop stale cache entries for it.
    pub fn add(&self, record: CoinRecord) {
        let id = record.name().to_string();
        self.catalog.add(record);
        self.invalidate(&id);
    }

    /// Remove the per-coin entry and the catalog listing entry.
    pub fn invalidate(&self, id: &str) {
        self.backend.delete(&coin_key(id));
        self.backend.delete(LISTING_KEY);
    }
}

impl CoinProvider for CachedCatalog {
    fn coin(&self, id: &str) -> Option<CoinRecord> {
        let key = coin_key(id);
        if let Some(cached) = self.backend.get(&key) {
            if let Ok(record) = serde_json::from_value::<CoinRecord>(cached) {
                return Some(record);
            }
        }

        let found = self.catalog.coin(id);
        if let Some(ref record) = found {
            if let Ok(value) = serde_json::to_value(record) {
                self.backend.set(&key, value, self.ttl);
            }
        }
        found
    }

    fn coin_ids(&self) -> Vec<String> {
        if let Some(cached) = self.backend.get(LISTING_KEY) {
            if let Ok(ids) = serde_json::from_value::<Vec<String>>(cached) {
                return ids;
            }
        }

        let ids = self.catalog.coin_ids();
        if let Ok(value) = serde_json::to_value(&ids) {
            self.backend.set(LISTING_KEY, value, self.ttl);
        }
        ids
    }
}
