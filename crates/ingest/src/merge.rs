//! DetailMerger - overlays cached slow-changing fields onto fresh records
//!
//! The cached record is the base and the fresh record the overlay: every
//! canonical field is present in the fresh record, so the cache contributes
//! sector, subsector and extra fields only. Cache keys are re-normalized to
//! the canonical key convention regardless of their original casing.

use std::collections::HashMap;

use log::debug;
use minerva_core::{CachedDetail, Indicator, IndicatorRecord, Ticker};

use crate::columns::{self, PRICE_KEY, TICKER_KEY};

/// Keys the cache is never allowed to overwrite: identity and price belong
/// to the fresh scrape, and every scoring output is recomputed each run.
fn is_reserved_key(key: &str) -> bool {
    key == TICKER_KEY
        || key == PRICE_KEY
        || key == "score"
        || key == "super_score"
        || key == "red_flags"
        || key == "filter_scores"
        || key.starts_with("score_")
        || Indicator::from_key(key).is_some()
}

/// Overlay cached details onto freshly parsed records.
///
/// Tickers absent from the cache pass through with their sector and
/// subsector left at the explicit unknown marker - downstream sector
/// grouping requires a total categorical field.
pub fn merge_details(
    records: Vec<IndicatorRecord>,
    details: &HashMap<Ticker, CachedDetail>,
) -> Vec<IndicatorRecord> {
    if details.is_empty() {
        return records;
    }
    debug!("Merging details for {} cached tickers", details.len());
    records
        .into_iter()
        .map(|record| {
            let detail = details.get(&record.ticker);
            merge_one(record, detail)
        })
        .collect()
}

fn merge_one(mut record: IndicatorRecord, detail: Option<&CachedDetail>) -> IndicatorRecord {
    let Some(detail) = detail else {
        return record;
    };

    for (raw_key, value) in &detail.fields {
        let key = columns::canonical_key(raw_key);
        match key.as_str() {
            "setor" => {
                // An empty cached sector counts as unknown
                if let Some(s) = value.as_str().filter(|s| !s.is_empty()) {
                    record.sector = s.to_string();
                }
            }
            "subsetor" => {
                if let Some(s) = value.as_str().filter(|s| !s.is_empty()) {
                    record.subsector = s.to_string();
                }
            }
            _ if is_reserved_key(&key) => {}
            _ => {
                record.extras.insert(key, value.clone());
            }
        }
    }
    record
}
