//! FilterScorer and StrategyAggregator
//!
//! Per record: every filter grades its indicator (`curve(value) * weight`),
//! then each strategy sums the already-weighted scores of the filters its
//! membership list names. No re-weighting happens at the strategy level.

use std::collections::BTreeMap;

use minerva_core::{IndicatorRecord, Score};

use crate::filter::FilterDefinition;
use crate::strategy::StrategyDefinition;

/// Weighted score for every filter; a missing indicator scores exactly zero
pub fn score_filters(
    record: &IndicatorRecord,
    filters: &[FilterDefinition],
) -> BTreeMap<String, Score> {
    filters
        .iter()
        .map(|filter| {
            let score = record
                .get(filter.indicator)
                .map(|value| filter.curve.score(value) * filter.weight)
                .unwrap_or(Score::ZERO);
            (filter.name.clone(), score)
        })
        .collect()
}

/// Sum of the member filter scores; names without a computed score are
/// ignored
pub fn score_strategy(
    filter_scores: &BTreeMap<String, Score>,
    strategy: &StrategyDefinition,
) -> Score {
    strategy
        .filters
        .iter()
        .filter_map(|name| filter_scores.get(name))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::default_filters;
    use crate::strategy::default_strategies;
    use minerva_core::{Indicator, Ticker};
    use rust_decimal_macros::dec;

    fn record_with(values: &[(Indicator, rust_decimal::Decimal)]) -> IndicatorRecord {
        let mut record = IndicatorRecord::new(Ticker::new("TEST3"));
        for (indicator, value) in values {
            record.set(*indicator, Some(*value));
        }
        record
    }

    #[test]
    fn test_missing_indicator_scores_zero() {
        let record = IndicatorRecord::new(Ticker::new("TEST3"));
        let scores = score_filters(&record, &default_filters());

        assert_eq!(scores.len(), 16);
        for (name, score) in &scores {
            assert_eq!(*score, Score::ZERO, "{name}");
        }
    }

    #[test]
    fn test_weighted_filter_scores() {
        let record = record_with(&[
            (Indicator::PriceEarnings, dec!(5)),   // top band 1.0 * 1.5
            (Indicator::Roe, dec!(0.18)),          // band 0.8 * 2.0
            (Indicator::DebtToEquity, dec!(0.2)),  // band 1.0 * 1.2
        ]);
        let scores = score_filters(&record, &default_filters());

        assert_eq!(scores["p_l"], dec!(1.5));
        assert_eq!(scores["roe"], dec!(1.6));
        assert_eq!(scores["div_bruta_patrimonio"], dec!(1.2));
        assert_eq!(scores["roic"], Score::ZERO);
    }

    #[test]
    fn test_strategy_sums_member_scores_only() {
        let record = record_with(&[
            (Indicator::PriceEarnings, dec!(5)),      // p_l 1.5
            (Indicator::PriceBook, dec!(0.9)),        // p_vp 1.2
            (Indicator::CurrentLiquidity, dec!(2.5)), // liquidez_corrente 1.0
            (Indicator::DebtToEquity, dec!(0.2)),     // div_bruta_patrimonio 1.2
            (Indicator::Roe, dec!(0.25)),             // not a graham member
        ]);
        let scores = score_filters(&record, &default_filters());
        let strategies = default_strategies();
        let graham = strategies.iter().find(|s| s.name == "graham").unwrap();

        assert_eq!(score_strategy(&scores, graham), dec!(4.9));
    }

    #[test]
    fn test_unknown_member_is_ignored() {
        let strategy = StrategyDefinition::new("custom", "", dec!(1.0), &["p_l", "no_such"]);
        let record = record_with(&[(Indicator::PriceEarnings, dec!(5))]);
        let scores = score_filters(&record, &default_filters());

        assert_eq!(score_strategy(&scores, &strategy), dec!(1.5));
    }

    #[test]
    fn test_identical_records_score_identically() {
        let record = record_with(&[
            (Indicator::PriceEarnings, dec!(8)),
            (Indicator::Roic, dec!(0.22)),
        ]);
        let twin = record.clone();

        let filters = default_filters();
        assert_eq!(
            score_filters(&record, &filters),
            score_filters(&twin, &filters)
        );
    }
}
