//! RiskFlagDetector - independent structural-risk predicates
//!
//! Each rule is evaluated on its own; a record may carry zero to several
//! flags. Missing values evaluate as zero, and sector matching is a
//! case-insensitive substring test against two fixed keyword lists.

use minerva_core::{Indicator, IndicatorRecord, RiskFlag};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Thresholds and keyword lists for the risk rules
///
/// Injectable by the orchestrator; the defaults reproduce the production
/// rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRuleConfig {
    /// Dividend-yield fraction above which the payout looks unsustainable
    pub dividend_trap_yield: Decimal,
    /// Net-margin fraction under which a positive margin is razor-thin
    pub low_margin_ceiling: Decimal,
    /// Debt/equity ratio above which leverage is flagged
    pub high_debt_ratio: Decimal,
    /// Average traded volume (raw currency unit) under which the composite
    /// score is capped
    pub low_liquidity_volume: Decimal,
    /// Sector keywords flagged as commodity-cyclical (matched lowercase)
    pub cyclical_keywords: Vec<String>,
    /// Sector keywords flagged as heavily regulated (matched lowercase)
    pub regulated_keywords: Vec<String>,
}

impl Default for RiskRuleConfig {
    fn default() -> Self {
        Self {
            dividend_trap_yield: dec!(0.15),
            low_margin_ceiling: dec!(0.03),
            high_debt_ratio: dec!(3.0),
            low_liquidity_volume: dec!(500_000),
            cyclical_keywords: [
                "mineração",
                "mineracao",
                "petróleo",
                "petroleo",
                "siderurgia",
                "metalurgia",
                "papel",
                "celulose",
                "commodities",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            regulated_keywords: [
                "energia",
                "elétrica",
                "eletrica",
                "saúde",
                "saude",
                "educação",
                "educacao",
                "telecom",
                "saneamento",
                "água",
                "agua",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Evaluate every rule against one record, in fixed detection order
pub fn detect_flags(record: &IndicatorRecord, rules: &RiskRuleConfig) -> Vec<RiskFlag> {
    let value = |indicator| record.get(indicator).unwrap_or(Decimal::ZERO);
    let mut flags = Vec::new();

    if value(Indicator::DividendYield) > rules.dividend_trap_yield {
        flags.push(RiskFlag::DividendTrap);
    }

    let margin = value(Indicator::NetMargin);
    if margin > Decimal::ZERO && margin < rules.low_margin_ceiling {
        flags.push(RiskFlag::LowMargin);
    }

    if value(Indicator::DebtToEquity) > rules.high_debt_ratio {
        flags.push(RiskFlag::HighDebt);
    }

    if value(Indicator::AvgVolume) < rules.low_liquidity_volume {
        flags.push(RiskFlag::LowLiquidity);
    }

    if value(Indicator::RevenueGrowth5y) < Decimal::ZERO {
        flags.push(RiskFlag::StagnantGrowth);
    }

    let sector = record.sector.to_lowercase();
    if rules.cyclical_keywords.iter().any(|kw| sector.contains(kw.as_str())) {
        flags.push(RiskFlag::CyclicalSector);
    }
    if rules.regulated_keywords.iter().any(|kw| sector.contains(kw.as_str())) {
        flags.push(RiskFlag::RegulatedSector);
    }

    flags
}
