//! LiquidityFilter - drops untradeable records before dedup and scoring
//!
//! Runs early so illiquid instruments never influence share-class selection
//! or any aggregate downstream.

use log::debug;
use minerva_core::{Indicator, IndicatorRecord, Ticker};
use rust_decimal::Decimal;

/// Keep records whose average traded volume is a positive number.
///
/// `min_net_worth`, when set, additionally drops records whose net worth is
/// missing or not above the floor (an upstream data-quality screen; off by
/// default).
pub fn retain_liquid(
    records: Vec<IndicatorRecord>,
    min_net_worth: Option<Decimal>,
) -> Vec<IndicatorRecord> {
    let before = records.len();
    let kept: Vec<IndicatorRecord> = records
        .into_iter()
        .filter(|r| r.volume().is_some_and(|v| v > Decimal::ZERO))
        .filter(|r| match min_net_worth {
            Some(floor) => r.get(Indicator::NetWorth).is_some_and(|nw| nw > floor),
            None => true,
        })
        .collect();
    debug!("Liquidity filter kept {}/{} records", kept.len(), before);
    kept
}

/// Drop blacklisted tickers
pub fn drop_blacklisted(
    records: Vec<IndicatorRecord>,
    blacklist: &[Ticker],
) -> Vec<IndicatorRecord> {
    if blacklist.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| !blacklist.contains(&r.ticker))
        .collect()
}
