//! ShareClassDeduplicator - one listing class per issuer
//!
//! Several tickers can represent the same underlying issuer (ordinary,
//! preferred, units). Scoring them all would let one issuer occupy several
//! ranks, so only the most liquid class survives. Grouping is by issuer
//! prefix; ties keep the first-seen class.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::debug;
use minerva_core::IndicatorRecord;
use rust_decimal::Decimal;

fn volume_or_zero(record: &IndicatorRecord) -> Decimal {
    record.volume().unwrap_or(Decimal::ZERO)
}

/// Collapse each issuer-prefix group to its highest-volume record.
/// Survivors are emitted in input order, so downstream stable ranking
/// keeps its tie-break meaningful.
pub fn dedupe_share_classes(records: Vec<IndicatorRecord>) -> Vec<IndicatorRecord> {
    let mut best: HashMap<String, usize> = HashMap::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        match best.entry(record.ticker.issuer_prefix()) {
            Entry::Occupied(mut entry) => {
                // Strictly greater replaces, so equal volumes keep first-seen
                if volume_or_zero(record) > volume_or_zero(&records[*entry.get()]) {
                    *entry.get_mut() = idx;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(idx);
            }
        }
    }

    let mut keep = vec![false; records.len()];
    for idx in best.into_values() {
        keep[idx] = true;
    }

    let before = records.len();
    let survivors: Vec<IndicatorRecord> = records
        .into_iter()
        .zip(keep)
        .filter_map(|(record, kept)| kept.then_some(record))
        .collect();
    debug!(
        "Share-class dedup kept {}/{} records",
        survivors.len(),
        before
    );
    survivors
}
