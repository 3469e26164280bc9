use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::Indicator;
use crate::values::Ticker;

/// Sector/subsector marker for records the detail cache knows nothing about.
/// Downstream sector grouping requires a total categorical field, so the
/// unknown case is an explicit value, never a null.
pub const UNKNOWN_SECTOR: &str = "N/A";

/// One security's normalized fundamentals
///
/// Built by the ingestion pipeline and consumed by scoring. Every canonical
/// indicator is present in the map; a missing value is an explicit `None`
/// (serialized as null), never a raw string. Proportion-typed indicators are
/// stored as fractions of 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRecord {
    #[serde(rename = "papel")]
    pub ticker: Ticker,
    #[serde(rename = "setor")]
    pub sector: String,
    #[serde(rename = "subsetor")]
    pub subsector: String,
    /// Quoted price
    #[serde(rename = "cotacao")]
    pub price: Option<Decimal>,
    /// Canonical numeric indicators
    #[serde(flatten)]
    pub indicators: BTreeMap<Indicator, Option<Decimal>>,
    /// Slow-changing fields overlaid from the detail cache
    #[serde(flatten)]
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl IndicatorRecord {
    /// Create a record with every indicator explicitly missing
    pub fn new(ticker: Ticker) -> Self {
        let indicators = Indicator::ALL.iter().map(|i| (*i, None)).collect();
        Self {
            ticker,
            sector: UNKNOWN_SECTOR.to_string(),
            subsector: UNKNOWN_SECTOR.to_string(),
            price: None,
            indicators,
            extras: BTreeMap::new(),
        }
    }

    /// Get an indicator value; `None` means missing
    pub fn get(&self, indicator: Indicator) -> Option<Decimal> {
        self.indicators.get(&indicator).copied().flatten()
    }

    /// Set an indicator value
    pub fn set(&mut self, indicator: Indicator, value: Option<Decimal>) {
        self.indicators.insert(indicator, value);
    }

    /// Two-month average traded volume, the liquidity measure used by the
    /// liquidity filter, the share-class deduplicator and the risk rules
    pub fn volume(&self) -> Option<Decimal> {
        self.get(Indicator::AvgVolume)
    }
}
