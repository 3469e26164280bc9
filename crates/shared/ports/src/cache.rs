use std::collections::HashMap;

use minerva_core::{CachedDetail, Ticker, Timestamp};

use crate::error::CacheResult;

/// Port for the externally managed detail cache
///
/// The raw scrape carries only the simple indicator table; sector, subsector
/// and other slow-changing fields live in a cache owned by the orchestrator.
/// The engine loads the whole mapping once per run and merges it before
/// scoring — it never writes back, and it stays agnostic of where the cache
/// lives (in memory, a database, a remote store).
///
/// Freshness contract: `as_of` reports when the cached details were stamped.
/// Whether stale details are acceptable is the orchestrator's decision; the
/// engine only logs the stamp and merges whatever it is handed.
pub trait DetailCache: Send + Sync {
    /// Load the full ticker -> detail mapping
    fn load(&self) -> CacheResult<HashMap<Ticker, CachedDetail>>;

    /// When the cached details were last refreshed, if known
    fn as_of(&self) -> Option<Timestamp>;
}
