//! Legacy flat score - backward-compatible 0-100 screen
//!
//! Predates the graded strategy scores and is still consumed downstream as
//! the `score` field. Each criterion grants partial credit for how close
//! the value sits to its ideal; missing values are skipped entirely.
//! Proportion thresholds are stated in fractions of 1, the canonical unit.

use minerva_core::{Indicator, IndicatorRecord, Score};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Which side of the ideal is good
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Lower is better; credit is `min(1, ideal / value)` for positive values
    Below,
    /// Higher is better; credit is `min(1, value / ideal)`
    Above,
}

/// One legacy screening criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleCriterion {
    pub indicator: Indicator,
    pub direction: Direction,
    pub ideal: Decimal,
}

impl SimpleCriterion {
    pub fn new(indicator: Indicator, direction: Direction, ideal: Decimal) -> Self {
        Self {
            indicator,
            direction,
            ideal,
        }
    }
}

/// The production criteria table
pub fn default_criteria() -> Vec<SimpleCriterion> {
    use Direction::{Above, Below};
    vec![
        SimpleCriterion::new(Indicator::PriceEarnings, Below, dec!(15)),
        SimpleCriterion::new(Indicator::PriceBook, Below, dec!(1.5)),
        SimpleCriterion::new(Indicator::PriceSales, Below, dec!(1.5)),
        SimpleCriterion::new(Indicator::DividendYield, Above, dec!(0.04)),
        SimpleCriterion::new(Indicator::PriceAssets, Below, dec!(1.5)),
        SimpleCriterion::new(Indicator::PriceWorkingCapital, Above, dec!(1)),
        SimpleCriterion::new(Indicator::PriceEbit, Below, dec!(12)),
        SimpleCriterion::new(Indicator::PriceNetCurrentAssets, Below, dec!(1.5)),
        SimpleCriterion::new(Indicator::EvEbit, Below, dec!(10)),
        SimpleCriterion::new(Indicator::EvEbitda, Below, dec!(8)),
        SimpleCriterion::new(Indicator::EbitMargin, Above, dec!(0.10)),
        SimpleCriterion::new(Indicator::NetMargin, Above, dec!(0.05)),
        SimpleCriterion::new(Indicator::CurrentLiquidity, Above, dec!(1.5)),
        SimpleCriterion::new(Indicator::Roic, Above, dec!(0.10)),
        SimpleCriterion::new(Indicator::Roe, Above, dec!(0.15)),
        SimpleCriterion::new(Indicator::DebtToEquity, Below, dec!(0.5)),
    ]
}

/// Flat 0-100 score: accumulated criterion credit over the criteria count,
/// rounded to two decimals
pub fn simple_score(record: &IndicatorRecord, criteria: &[SimpleCriterion]) -> Score {
    if criteria.is_empty() {
        return Score::ZERO;
    }

    let mut points = Decimal::ZERO;
    for criterion in criteria {
        let Some(value) = record.get(criterion.indicator) else {
            continue;
        };
        match criterion.direction {
            Direction::Below => {
                if value > Decimal::ZERO {
                    if let Some(ratio) = criterion.ideal.checked_div(value) {
                        points += ratio.min(Decimal::ONE);
                    }
                }
            }
            Direction::Above => {
                if let Some(ratio) = value.checked_div(criterion.ideal) {
                    points += ratio.min(Decimal::ONE);
                }
            }
        }
    }

    let total = Decimal::from(criteria.len());
    (points / total * dec!(100)).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minerva_core::Ticker;

    #[test]
    fn test_empty_record_scores_zero() {
        let record = IndicatorRecord::new(Ticker::new("TEST3"));
        assert_eq!(simple_score(&record, &default_criteria()), Score::ZERO);
    }

    #[test]
    fn test_full_credit_on_one_criterion() {
        let mut record = IndicatorRecord::new(Ticker::new("TEST3"));
        record.set(Indicator::PriceEarnings, Some(dec!(10)));

        // 15/10 capped at 1 point, over 16 criteria
        assert_eq!(
            simple_score(&record, &default_criteria()),
            (Decimal::ONE / dec!(16) * dec!(100)).round_dp(2)
        );
    }

    #[test]
    fn test_partial_credit_below() {
        let mut record = IndicatorRecord::new(Ticker::new("TEST3"));
        record.set(Indicator::PriceEarnings, Some(dec!(30)));

        // 15/30 = half a point
        assert_eq!(
            simple_score(&record, &default_criteria()),
            (dec!(0.5) / dec!(16) * dec!(100)).round_dp(2)
        );
    }

    #[test]
    fn test_negative_cheapness_ratio_earns_nothing() {
        let mut record = IndicatorRecord::new(Ticker::new("TEST3"));
        record.set(Indicator::PriceEarnings, Some(dec!(-5)));
        assert_eq!(simple_score(&record, &default_criteria()), Score::ZERO);
    }

    #[test]
    fn test_proportion_thresholds_use_fractions() {
        let mut record = IndicatorRecord::new(Ticker::new("TEST3"));
        // 18% ROE as a fraction earns the full ROE point
        record.set(Indicator::Roe, Some(dec!(0.18)));

        assert_eq!(
            simple_score(&record, &default_criteria()),
            (Decimal::ONE / dec!(16) * dec!(100)).round_dp(2)
        );
    }
}
