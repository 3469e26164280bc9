//! In-memory detail cache
//!
//! Reference implementation of the `DetailCache` port for tests and
//! single-process orchestrators. Backed by a concurrent map so several
//! orchestrator tasks can share one instance; the engine itself only ever
//! reads a full copy per run.

use std::collections::HashMap;
use std::sync::RwLock;

use dashmap::DashMap;
use minerva_core::{CachedDetail, Ticker, Timestamp};
use minerva_ports::{CacheResult, DetailCache};

pub struct MemoryDetailCache {
    details: DashMap<Ticker, CachedDetail>,
    stamped_at: RwLock<Option<Timestamp>>,
}

impl MemoryDetailCache {
    pub fn new() -> Self {
        Self {
            details: DashMap::new(),
            stamped_at: RwLock::new(None),
        }
    }

    /// Insert or replace one ticker's details
    pub fn insert(&self, ticker: impl Into<Ticker>, detail: CachedDetail) {
        self.details.insert(ticker.into(), detail);
    }

    /// Record when the cached details were refreshed
    pub fn stamp(&self, at: Timestamp) {
        if let Ok(mut guard) = self.stamped_at.write() {
            *guard = Some(at);
        }
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

impl Default for MemoryDetailCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailCache for MemoryDetailCache {
    fn load(&self) -> CacheResult<HashMap<Ticker, CachedDetail>> {
        Ok(self
            .details
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    fn as_of(&self) -> Option<Timestamp> {
        self.stamped_at.read().map(|guard| *guard).unwrap_or(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_normalizes_ticker() {
        let cache = MemoryDetailCache::new();
        cache.insert("vale3", CachedDetail::with_sector("Mineração", "x"));

        let details = cache.load().unwrap();
        assert!(details.contains_key(&Ticker::new("VALE3")));
    }

    #[test]
    fn test_as_of_roundtrip() {
        let cache = MemoryDetailCache::new();
        assert_eq!(cache.as_of(), None);

        let stamp = chrono::Utc::now();
        cache.stamp(stamp);
        assert_eq!(cache.as_of(), Some(stamp));
    }
}
