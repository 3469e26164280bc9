//! Filter definitions - the sixteen elementary fundamental tests
//!
//! Names, weights and breakpoints are captured verbatim from the production
//! configuration. They ship as `default_filters()` so the orchestrator can
//! inject overrides without touching code.

use minerva_core::Indicator;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::curve::{Band, StepCurve};

/// One elementary fundamental test with a graded [0, 1] curve and a fixed
/// positive weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDefinition {
    /// Unique name; strategies reference filters by this name
    pub name: String,
    /// Indicator the curve reads
    pub indicator: Indicator,
    /// Weight applied to the curve output
    pub weight: Decimal,
    pub curve: StepCurve,
}

impl FilterDefinition {
    pub fn new(
        name: impl Into<String>,
        indicator: Indicator,
        weight: Decimal,
        curve: StepCurve,
    ) -> Self {
        Self {
            name: name.into(),
            indicator,
            weight,
            curve,
        }
    }
}

fn up_to(bands: &[(Decimal, Decimal)]) -> StepCurve {
    StepCurve::UpTo {
        bands: bands.iter().map(|(b, s)| Band::new(*b, *s)).collect(),
    }
}

fn over(bands: &[(Decimal, Decimal)]) -> StepCurve {
    StepCurve::Over {
        bands: bands.iter().map(|(b, s)| Band::new(*b, *s)).collect(),
    }
}

fn under(bands: &[(Decimal, Decimal)]) -> StepCurve {
    StepCurve::Under {
        bands: bands.iter().map(|(b, s)| Band::new(*b, *s)).collect(),
    }
}

/// The production filter set
pub fn default_filters() -> Vec<FilterDefinition> {
    vec![
        FilterDefinition::new(
            "p_l",
            Indicator::PriceEarnings,
            dec!(1.5),
            up_to(&[
                (dec!(6), dec!(1.0)),
                (dec!(10), dec!(0.7)),
                (dec!(15), dec!(0.3)),
            ]),
        ),
        FilterDefinition::new(
            "p_vp",
            Indicator::PriceBook,
            dec!(1.2),
            up_to(&[
                (dec!(1.0), dec!(1.0)),
                (dec!(1.5), dec!(0.6)),
                (dec!(2.0), dec!(0.2)),
            ]),
        ),
        FilterDefinition::new(
            "ev_ebit",
            Indicator::EvEbit,
            dec!(1.5),
            up_to(&[
                (dec!(5), dec!(1.0)),
                (dec!(8), dec!(0.7)),
                (dec!(10), dec!(0.3)),
            ]),
        ),
        FilterDefinition::new(
            "dividend_yield",
            Indicator::DividendYield,
            dec!(1.0),
            over(&[
                (dec!(0.10), dec!(1.0)),
                (dec!(0.06), dec!(0.7)),
                (dec!(0.04), dec!(0.3)),
            ]),
        ),
        FilterDefinition::new(
            "roe",
            Indicator::Roe,
            dec!(2.0),
            over(&[
                (dec!(0.20), dec!(1.0)),
                (dec!(0.15), dec!(0.8)),
                (dec!(0.10), dec!(0.4)),
            ]),
        ),
        FilterDefinition::new(
            "roic",
            Indicator::Roic,
            dec!(2.0),
            over(&[
                (dec!(0.20), dec!(1.0)),
                (dec!(0.15), dec!(0.8)),
                (dec!(0.10), dec!(0.4)),
            ]),
        ),
        FilterDefinition::new(
            "margem_liquida",
            Indicator::NetMargin,
            dec!(1.5),
            over(&[
                (dec!(0.15), dec!(1.0)),
                (dec!(0.10), dec!(0.7)),
                (dec!(0.05), dec!(0.3)),
            ]),
        ),
        FilterDefinition::new(
            "div_bruta_patrimonio",
            Indicator::DebtToEquity,
            dec!(1.2),
            under(&[
                (dec!(0.5), dec!(1.0)),
                (dec!(1.0), dec!(0.5)),
                (dec!(1.5), dec!(0.1)),
            ]),
        ),
        FilterDefinition::new(
            "liquidez_corrente",
            Indicator::CurrentLiquidity,
            dec!(1.0),
            over(&[
                (dec!(2.0), dec!(1.0)),
                (dec!(1.5), dec!(0.7)),
                (dec!(1.0), dec!(0.2)),
            ]),
        ),
        FilterDefinition::new(
            "psr",
            Indicator::PriceSales,
            dec!(0.5),
            up_to(&[(dec!(1.5), dec!(1.0))]),
        ),
        FilterDefinition::new(
            "p_ativo",
            Indicator::PriceAssets,
            dec!(0.5),
            up_to(&[(dec!(1.5), dec!(1.0))]),
        ),
        FilterDefinition::new(
            "p_cap_giro",
            Indicator::PriceWorkingCapital,
            dec!(0.5),
            over(&[(dec!(1), dec!(1.0))]),
        ),
        FilterDefinition::new(
            "p_ebit",
            Indicator::PriceEbit,
            dec!(1.0),
            up_to(&[(dec!(12), dec!(1.0))]),
        ),
        FilterDefinition::new(
            "p_ativo_circulante_liq",
            Indicator::PriceNetCurrentAssets,
            dec!(0.5),
            up_to(&[(dec!(1.5), dec!(1.0))]),
        ),
        FilterDefinition::new(
            "ev_ebitda",
            Indicator::EvEbitda,
            dec!(1.0),
            up_to(&[(dec!(8), dec!(1.0))]),
        ),
        FilterDefinition::new(
            "margem_ebit",
            Indicator::EbitMargin,
            dec!(1.0),
            over(&[(dec!(0.10), dec!(1.0))]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_filters() {
        let filters = default_filters();
        assert_eq!(filters.len(), 16);
    }

    #[test]
    fn test_names_are_unique() {
        let filters = default_filters();
        let mut names: Vec<&str> = filters.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), filters.len());
    }

    #[test]
    fn test_weights_are_positive() {
        for filter in default_filters() {
            assert!(filter.weight > Decimal::ZERO, "{}", filter.name);
        }
    }

    #[test]
    fn test_pe_curve_bands() {
        let filters = default_filters();
        let pe = filters.iter().find(|f| f.name == "p_l").unwrap();
        // Cheapest band peaks, very high ratios and losses score zero
        assert_eq!(pe.curve.score(dec!(5)), dec!(1.0));
        assert_eq!(pe.curve.score(dec!(12)), dec!(0.3));
        assert_eq!(pe.curve.score(dec!(40)), dec!(0.0));
        assert_eq!(pe.curve.score(dec!(-1)), dec!(0.0));
    }
}
