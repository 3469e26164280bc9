use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use super::{IndicatorRecord, RiskFlag};
use crate::values::{Score, Timestamp};

/// Prefix for the per-strategy score fields (`score_graham`, ...)
pub const STRATEGY_SCORE_PREFIX: &str = "score_";

/// Fully scored record: normalized fundamentals plus every score surface
///
/// Created once per run and never mutated afterwards. Serializes flat:
/// record fields, per-strategy `score_<strategy>` fields, the legacy
/// `score`, the composite `super_score` and the `red_flags` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: IndicatorRecord,
    /// Weighted per-filter scores, keyed by filter name
    pub filter_scores: BTreeMap<String, Score>,
    /// Weighted per-strategy scores, keyed `score_<strategy>`, rounded to 2dp
    #[serde(flatten)]
    pub strategy_scores: BTreeMap<String, Score>,
    /// Legacy flat 0-100 score kept for downstream compatibility
    pub score: Score,
    /// Composite ranking score, rounded to 2dp and capped on low liquidity
    pub super_score: Score,
    /// Risk tags in fixed detection order
    pub red_flags: Vec<RiskFlag>,
}

impl ScoredRecord {
    /// Serialized field name for a strategy's score
    pub fn strategy_key(strategy: &str) -> String {
        format!("{STRATEGY_SCORE_PREFIX}{strategy}")
    }

    /// Look up a strategy score by strategy name
    pub fn strategy_score(&self, strategy: &str) -> Option<Score> {
        self.strategy_scores
            .get(&Self::strategy_key(strategy))
            .copied()
    }

    pub fn has_flag(&self, flag: RiskFlag) -> bool {
        self.red_flags.contains(&flag)
    }
}

/// The ranked output of one engine run
///
/// Records are sorted by `super_score` descending; ties keep input order.
/// Snapshot metadata is carried through from the raw input untouched.
#[derive(Debug, Clone, Serialize)]
pub struct RankedSnapshot {
    pub snapshot_id: Uuid,
    pub captured_at: Timestamp,
    pub records: Vec<ScoredRecord>,
}

impl RankedSnapshot {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate tickers in rank order
    pub fn tickers(&self) -> impl Iterator<Item = &crate::values::Ticker> {
        self.records.iter().map(|r| &r.record.ticker)
    }
}
