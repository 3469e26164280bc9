use serde::{Deserialize, Serialize};

/// Canonical fundamental indicator keys
///
/// The closed set of numeric indicators every record carries. The serialized
/// names are the field-name contract consumed downstream and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    /// Price / earnings (`p_l`)
    #[serde(rename = "p_l")]
    PriceEarnings,
    /// Price / book value (`p_vp`)
    #[serde(rename = "p_vp")]
    PriceBook,
    /// Price / sales (`psr`)
    #[serde(rename = "psr")]
    PriceSales,
    /// Trailing dividend yield, fraction of 1 (`dividend_yield`)
    #[serde(rename = "dividend_yield")]
    DividendYield,
    /// Price / total assets (`p_ativo`)
    #[serde(rename = "p_ativo")]
    PriceAssets,
    /// Price / working capital (`p_cap_giro`)
    #[serde(rename = "p_cap_giro")]
    PriceWorkingCapital,
    /// Price / EBIT (`p_ebit`)
    #[serde(rename = "p_ebit")]
    PriceEbit,
    /// Price / net current assets (`p_ativo_circulante_liq`)
    #[serde(rename = "p_ativo_circulante_liq")]
    PriceNetCurrentAssets,
    /// Enterprise value / EBIT (`ev_ebit`)
    #[serde(rename = "ev_ebit")]
    EvEbit,
    /// Enterprise value / EBITDA (`ev_ebitda`)
    #[serde(rename = "ev_ebitda")]
    EvEbitda,
    /// EBIT margin, fraction of 1 (`margem_ebit`)
    #[serde(rename = "margem_ebit")]
    EbitMargin,
    /// Net margin, fraction of 1 (`margem_liquida`)
    #[serde(rename = "margem_liquida")]
    NetMargin,
    /// Current liquidity ratio (`liquidez_corrente`)
    #[serde(rename = "liquidez_corrente")]
    CurrentLiquidity,
    /// Return on invested capital, fraction of 1 (`roic`)
    #[serde(rename = "roic")]
    Roic,
    /// Return on equity, fraction of 1 (`roe`)
    #[serde(rename = "roe")]
    Roe,
    /// Two-month average traded volume, raw currency (`liquidez_2meses`)
    #[serde(rename = "liquidez_2meses")]
    AvgVolume,
    /// Net worth (`patrimonio_liquido`)
    #[serde(rename = "patrimonio_liquido")]
    NetWorth,
    /// Gross debt / equity (`div_bruta_patrimonio`)
    #[serde(rename = "div_bruta_patrimonio")]
    DebtToEquity,
    /// Five-year revenue growth, fraction of 1 (`crescimento_receita_5a`)
    #[serde(rename = "crescimento_receita_5a")]
    RevenueGrowth5y,
}

impl Indicator {
    /// All canonical indicators in serialization order
    pub const ALL: [Indicator; 19] = [
        Indicator::PriceEarnings,
        Indicator::PriceBook,
        Indicator::PriceSales,
        Indicator::DividendYield,
        Indicator::PriceAssets,
        Indicator::PriceWorkingCapital,
        Indicator::PriceEbit,
        Indicator::PriceNetCurrentAssets,
        Indicator::EvEbit,
        Indicator::EvEbitda,
        Indicator::EbitMargin,
        Indicator::NetMargin,
        Indicator::CurrentLiquidity,
        Indicator::Roic,
        Indicator::Roe,
        Indicator::AvgVolume,
        Indicator::NetWorth,
        Indicator::DebtToEquity,
        Indicator::RevenueGrowth5y,
    ];

    /// Canonical serialized key
    pub fn key(&self) -> &'static str {
        match self {
            Indicator::PriceEarnings => "p_l",
            Indicator::PriceBook => "p_vp",
            Indicator::PriceSales => "psr",
            Indicator::DividendYield => "dividend_yield",
            Indicator::PriceAssets => "p_ativo",
            Indicator::PriceWorkingCapital => "p_cap_giro",
            Indicator::PriceEbit => "p_ebit",
            Indicator::PriceNetCurrentAssets => "p_ativo_circulante_liq",
            Indicator::EvEbit => "ev_ebit",
            Indicator::EvEbitda => "ev_ebitda",
            Indicator::EbitMargin => "margem_ebit",
            Indicator::NetMargin => "margem_liquida",
            Indicator::CurrentLiquidity => "liquidez_corrente",
            Indicator::Roic => "roic",
            Indicator::Roe => "roe",
            Indicator::AvgVolume => "liquidez_2meses",
            Indicator::NetWorth => "patrimonio_liquido",
            Indicator::DebtToEquity => "div_bruta_patrimonio",
            Indicator::RevenueGrowth5y => "crescimento_receita_5a",
        }
    }

    /// Look up an indicator by its canonical key
    pub fn from_key(key: &str) -> Option<Indicator> {
        Indicator::ALL.iter().copied().find(|i| i.key() == key)
    }

    /// Proportion-typed indicators arrive as percentages and are stored as
    /// fractions of 1. The division by 100 happens exactly once, at parse
    /// time; no downstream consumer re-guesses the unit.
    pub fn is_proportion(&self) -> bool {
        matches!(
            self,
            Indicator::DividendYield
                | Indicator::EbitMargin
                | Indicator::NetMargin
                | Indicator::Roic
                | Indicator::Roe
                | Indicator::RevenueGrowth5y
        )
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for indicator in Indicator::ALL {
            assert_eq!(Indicator::from_key(indicator.key()), Some(indicator));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(Indicator::from_key("dre_12m"), None);
    }

    #[test]
    fn test_proportion_set() {
        assert!(Indicator::DividendYield.is_proportion());
        assert!(Indicator::NetMargin.is_proportion());
        assert!(Indicator::RevenueGrowth5y.is_proportion());
        assert!(!Indicator::PriceEarnings.is_proportion());
        assert!(!Indicator::AvgVolume.is_proportion());
        assert!(!Indicator::DebtToEquity.is_proportion());
    }

    #[test]
    fn test_serde_names_match_keys() {
        for indicator in Indicator::ALL {
            let json = serde_json::to_string(&indicator).unwrap();
            assert_eq!(json, format!("\"{}\"", indicator.key()));
        }
    }
}
