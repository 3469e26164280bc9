//! CompositeRanker - strategy combination, liquidity cap, stable ordering
//!
//! The composite is the weighted sum of the *unrounded* strategy scores,
//! rounded once to two decimals (half-to-even). LOW_LIQUIDITY is the only
//! flag allowed to touch the score: it caps the composite at the configured
//! ceiling. Ordering is descending and stable, so input order breaks ties.

use std::collections::BTreeMap;

use minerva_core::{RiskFlag, Score, ScoredRecord};
use minerva_scoring::StrategyDefinition;

/// Weighted combination of raw strategy scores, rounded to two decimals
pub fn composite(
    raw_strategy_scores: &BTreeMap<String, Score>,
    strategies: &[StrategyDefinition],
) -> Score {
    let total: Score = strategies
        .iter()
        .filter_map(|s| raw_strategy_scores.get(&s.name).map(|raw| raw * s.weight))
        .sum();
    total.round_dp(2)
}

/// Cap the composite when the record is flagged illiquid. A ceiling only:
/// composites already below the cap pass through unchanged.
pub fn apply_liquidity_cap(composite: Score, flags: &[RiskFlag], cap: Score) -> Score {
    if flags.contains(&RiskFlag::LowLiquidity) {
        composite.min(cap)
    } else {
        composite
    }
}

/// Sort scored records by composite descending; stable, so ties keep input
/// order
pub fn rank(mut records: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    records.sort_by(|a, b| b.super_score.cmp(&a.super_score));
    records
}
