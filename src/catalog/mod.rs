// src/catalog/mod.rs — Coin catalog and the provider seam

pub mod cache;
pub mod seed;
pub mod types;

use std::collections::BTreeMap;
use std::sync::RwLock;

use types::CoinRecord;

/// Read seam for coin data. Matchers depend on this, not on a concrete
/// store, so the cache decorator (or a test double) can slot in.
pub trait CoinProvider: Send + Sync {
    /// Look up a coin by id, case-insensitively. Absent ids yield `None`.
    fn coin(&self, id: &str) -> Option<CoinRecord>;

    /// All known coin ids in deterministic order.
    fn coin_ids(&self) -> Vec<String>;
}

/// In-memory catalog keyed by canonical lowercase name.
///
/// Read-mostly shared state: `add` upserts and is visible to readers
/// immediately (the cache layer is invalidated separately). Keys iterate in
/// `BTreeMap` order, which keeps fuzzy-match and modal-trend tie-breaks
/// deterministic across runs.
pub struct CoinCatalog {
    coins: RwLock<BTreeMap<String, CoinRecord>>,
}

impl CoinCatalog {
    pub fn new() -> Self {
        Self {
            coins: RwLock::new(BTreeMap::new()),
        }
    }

    /// Catalog preloaded with the built-in dataset.
    pub fn seeded() -> Self {
        let catalog = Self::new();
        for record in seed::seed_coins() {
            catalog.add(record);
        }
        catalog
    }

    /// Upsert by canonical name.
    pub fn add(&self, record: CoinRecord) {
        if let Ok(mut coins) = self.coins.write() {
            coins.insert(record.name().to_string(), record);
        }
    }
}

impl Default for CoinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinProvider for CoinCatalog {
    fn coin(&self, id: &str) -> Option<CoinRecord> {
        let coins = self.coins.read().ok()?;
        coins.get(&id.to_lowercase()).cloned()
    }

    fn coin_ids(&self) -> Vec<String> {
        self.coins
            .read()
            .map(|coins| coins.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_contents() {
        let catalog = CoinCatalog::seeded();
        let ids = catalog.coin_ids();
        assert_eq!(
            ids,
            ["bitcoin", "cardano", "chainlink", "dogecoin", "ethereum", "solana"]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = CoinCatalog::seeded();
        let coin = catalog.coin("Bitcoin").unwrap();
        assert_eq!(coin.name(), "bitcoin");
    }

    #[test]
    fn test_absent_id_yields_none() {
        let catalog = CoinCatalog::seeded();
        assert!(catalog.coin("pepecoin").is_none());
    }

    #[test]
    fn test_add_is_immediately_visible() {
        let catalog = CoinCatalog::new();
        catalog.add(CoinRecord::new("pepecoin", "pump", "v", "a"));
        assert!(catalog.coin("pepecoin").is_some());
        assert_eq!(catalog.coin_ids(), ["pepecoin"]);
    }

    #[test]
    fn test_add_upserts_existing_record() {
        let catalog = CoinCatalog::seeded();
        catalog.add(CoinRecord::new("bitcoin", "bearish", "new verdict", "new advice"));
        let coin = catalog.coin("bitcoin").unwrap();
        assert_eq!(coin.trend, "bearish");
        assert_eq!(catalog.coin_ids().len(), 6);
    }
}
