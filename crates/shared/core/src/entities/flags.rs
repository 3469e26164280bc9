use serde::{Deserialize, Serialize};

/// Advisory risk tag attached to a scored record
///
/// Flags are independent and non-exclusive; a record may carry zero to
/// several. All are advisory metadata except `LowLiquidity`, which caps the
/// composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskFlag {
    /// Dividend yield too high to be sustainable
    DividendTrap,
    /// Positive but razor-thin net margin
    LowMargin,
    /// Gross debt well above equity
    HighDebt,
    /// Traded volume below the tradeability floor; caps the composite score
    LowLiquidity,
    /// Revenue shrinking over five years
    StagnantGrowth,
    /// Sector exposed to commodity cycles
    CyclicalSector,
    /// Sector under heavy regulatory oversight
    RegulatedSector,
}

impl RiskFlag {
    /// Serialized tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFlag::DividendTrap => "DIVIDEND_TRAP",
            RiskFlag::LowMargin => "LOW_MARGIN",
            RiskFlag::HighDebt => "HIGH_DEBT",
            RiskFlag::LowLiquidity => "LOW_LIQUIDITY",
            RiskFlag::StagnantGrowth => "STAGNANT_GROWTH",
            RiskFlag::CyclicalSector => "CYCLICAL_SECTOR",
            RiskFlag::RegulatedSector => "REGULATED_SECTOR",
        }
    }
}

impl std::fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_display() {
        let flags = [
            RiskFlag::DividendTrap,
            RiskFlag::LowMargin,
            RiskFlag::HighDebt,
            RiskFlag::LowLiquidity,
            RiskFlag::StagnantGrowth,
            RiskFlag::CyclicalSector,
            RiskFlag::RegulatedSector,
        ];
        for flag in flags {
            let json = serde_json::to_string(&flag).unwrap();
            assert_eq!(json, format!("\"{}\"", flag.as_str()));
        }
    }
}
