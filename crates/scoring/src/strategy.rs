//! Strategy definitions - fixed filter combinations with weights
//!
//! Each strategy approximates a classical value-investing methodology by
//! naming the filters whose weighted scores it sums. Captured verbatim from
//! the production configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A named, fixed combination of filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyDefinition {
    /// Unique name; the serialized score field is `score_<name>`
    pub name: String,
    pub description: String,
    /// Weight applied when combining strategies into the composite
    pub weight: Decimal,
    /// Names of the filters whose scores this strategy sums
    pub filters: Vec<String>,
}

impl StrategyDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        weight: Decimal,
        filters: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weight,
            filters: filters.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// The production strategy set
pub fn default_strategies() -> Vec<StrategyDefinition> {
    vec![
        StrategyDefinition::new(
            "graham",
            "Valor + Segurança (Benjamin Graham)",
            dec!(1.0),
            &["p_l", "p_vp", "liquidez_corrente", "div_bruta_patrimonio"],
        ),
        StrategyDefinition::new(
            "greenblatt",
            "Magic Formula (Joel Greenblatt)",
            dec!(1.5),
            &["roic", "ev_ebit"],
        ),
        StrategyDefinition::new(
            "bazin",
            "Dividendos (Décio Bazin)",
            dec!(1.0),
            &["dividend_yield", "div_bruta_patrimonio", "p_l"],
        ),
        StrategyDefinition::new(
            "qualidade",
            "Qualidade + Rentabilidade",
            dec!(2.0),
            &["roe", "margem_liquida", "roic", "div_bruta_patrimonio"],
        ),
    ]
}
