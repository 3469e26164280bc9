//! Pipeline orchestration
//!
//! One call, one snapshot, one ranked output. Stage order matters in two
//! places: liquidity filtering runs before deduplication so illiquid
//! classes never win class selection, and every discarded class is gone
//! before any scoring happens.

use std::collections::{BTreeMap, HashMap};

use log::{debug, info, warn};
use minerva_core::{
    CachedDetail, IndicatorRecord, RankedSnapshot, RawSnapshot, ScoredRecord, Ticker,
};
use minerva_ingest::{dedup, filter, merge, parser, scale};
use minerva_ports::DetailCache;
use minerva_scoring::{detect_flags, score_filters, score_strategy, simple_score};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::ranker;

/// The scoring engine: pure, synchronous, configured once
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the pipeline over one snapshot with an already-loaded detail map
    ///
    /// An empty snapshot yields an empty ranked output; only a structurally
    /// malformed one is an error.
    pub fn run(
        &self,
        snapshot: &RawSnapshot,
        details: &HashMap<Ticker, CachedDetail>,
    ) -> EngineResult<RankedSnapshot> {
        info!("Scoring snapshot {} ({} rows)", snapshot.id, snapshot.len());

        let records = parser::parse_snapshot(snapshot)?;
        let records = scale::correct(records);
        let records = filter::retain_liquid(records, self.config.min_net_worth);
        let records = filter::drop_blacklisted(records, &self.config.blacklist);
        let records = merge::merge_details(records, details);
        let records = if self.config.dedup_enabled {
            dedup::dedupe_share_classes(records)
        } else {
            records
        };

        let scored: Vec<ScoredRecord> = records
            .into_iter()
            .map(|record| self.score_record(record))
            .collect();
        let ranked = ranker::rank(scored);

        info!("{} securities ranked", ranked.len());
        Ok(RankedSnapshot {
            snapshot_id: snapshot.id,
            captured_at: snapshot.captured_at,
            records: ranked,
        })
    }

    /// Run the pipeline, loading details through the cache port first.
    /// A cache failure degrades to an empty detail map.
    pub fn run_with_cache(
        &self,
        snapshot: &RawSnapshot,
        cache: &dyn DetailCache,
    ) -> EngineResult<RankedSnapshot> {
        let details = match cache.load() {
            Ok(details) => {
                if let Some(stamp) = cache.as_of() {
                    debug!("Detail cache stamped at {stamp}");
                }
                details
            }
            Err(err) => {
                warn!("Proceeding without cached details: {err}");
                HashMap::new()
            }
        };
        self.run(snapshot, &details)
    }

    fn score_record(&self, record: IndicatorRecord) -> ScoredRecord {
        let red_flags = detect_flags(&record, &self.config.risk_rules);
        let filter_scores = score_filters(&record, &self.config.filters);

        let mut raw_scores = BTreeMap::new();
        let mut strategy_scores = BTreeMap::new();
        for strategy in &self.config.strategies {
            let raw = score_strategy(&filter_scores, strategy);
            raw_scores.insert(strategy.name.clone(), raw);
            strategy_scores.insert(
                ScoredRecord::strategy_key(&strategy.name),
                raw.round_dp(2),
            );
        }

        let composite = ranker::composite(&raw_scores, &self.config.strategies);
        let super_score =
            ranker::apply_liquidity_cap(composite, &red_flags, self.config.liquidity_score_cap);
        let score = simple_score(&record, &self.config.simple_criteria);

        ScoredRecord {
            record,
            filter_scores,
            strategy_scores,
            score,
            super_score,
            red_flags,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
