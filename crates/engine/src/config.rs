//! Engine configuration
//!
//! One serializable parameter object holding every knob the orchestrator
//! can inject: filter curves, strategy memberships, risk rules, the
//! liquidity cap and the ingestion toggles. The defaults reproduce the
//! production configuration.

use minerva_core::{Score, Ticker};
use minerva_scoring::{
    FilterDefinition, RiskRuleConfig, SimpleCriterion, StrategyDefinition, default_criteria,
    default_filters, default_strategies,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The sixteen graded fundamental tests
    pub filters: Vec<FilterDefinition>,
    /// The four strategy combinations
    pub strategies: Vec<StrategyDefinition>,
    /// Legacy flat-score criteria
    pub simple_criteria: Vec<SimpleCriterion>,
    /// Risk-flag thresholds and keyword lists
    pub risk_rules: RiskRuleConfig,
    /// Ceiling applied to the composite when LOW_LIQUIDITY is flagged
    pub liquidity_score_cap: Score,
    /// Collapse listing classes of one issuer to the most liquid one
    pub dedup_enabled: bool,
    /// Tickers excluded outright
    pub blacklist: Vec<Ticker>,
    /// Optional net-worth floor applied alongside the liquidity filter
    pub min_net_worth: Option<Decimal>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            filters: default_filters(),
            strategies: default_strategies(),
            simple_criteria: default_criteria(),
            risk_rules: RiskRuleConfig::default(),
            liquidity_score_cap: dec!(50.0),
            dedup_enabled: true,
            blacklist: Vec::new(),
            min_net_worth: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.filters.len(), 16);
        assert_eq!(config.strategies.len(), 4);
        assert_eq!(config.liquidity_score_cap, dec!(50.0));
        assert!(config.dedup_enabled);
        assert!(config.blacklist.is_empty());
        assert_eq!(config.min_net_worth, None);
    }

    #[test]
    fn test_config_is_auditable_data() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
