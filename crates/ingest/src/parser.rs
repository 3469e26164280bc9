//! ValueParser - raw cell text to typed values
//!
//! Cells arrive in Brazilian number format: `.` as thousand separator, `,`
//! as decimal comma, optional trailing `%`, and a bare `-` meaning "absent"
//! (which must not be confused with the leading minus of a true negative
//! like `-3,2`). Anything unparseable degrades to missing; the run never
//! aborts for one bad cell.
//!
//! Proportion-typed indicators are divided by 100 here, exactly once. The
//! canonical unit for yields, margins, returns and growth is "fraction of
//! 1" system-wide; no downstream consumer re-guesses it.

use std::str::FromStr;

use log::warn;
use minerva_core::{Indicator, IndicatorRecord, RawSnapshot, Ticker};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::columns::{self, PRICE_KEY, TICKER_KEY};
use crate::error::{IngestError, IngestResult};

/// Parse one numeric cell. `None` for the bare dash, empty text or a parse
/// failure - never an error.
pub fn parse_numeric(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }
    let stripped = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let normalized: String = stripped
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    Decimal::from_str(&normalized).ok()
}

/// Parse a proportion-typed cell: numeric parse, then the single division
/// by 100 that standardizes the unit to a fraction of 1
pub fn parse_proportion(raw: &str) -> Option<Decimal> {
    parse_numeric(raw).and_then(|v| v.checked_div(dec!(100)))
}

/// Parse a ticker cell: trimmed, uppercased; empty and the bare dash are
/// treated as absent
pub fn parse_ticker(raw: &str) -> Option<Ticker> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }
    Some(Ticker::new(trimmed))
}

/// Parse a raw snapshot into indicator records
///
/// Rows without a usable ticker are dropped with a warning. A non-empty
/// snapshot in which no row carries the ticker column is structurally
/// malformed and surfaces as a typed error, distinct from "zero rows".
/// Columns outside the canonical indicator set are ignored; the detail
/// cache is the pass-through channel for extra fields.
pub fn parse_snapshot(snapshot: &RawSnapshot) -> IngestResult<Vec<IndicatorRecord>> {
    if snapshot.is_empty() {
        return Ok(Vec::new());
    }

    let mut saw_ticker_column = false;
    let mut records = Vec::with_capacity(snapshot.len());

    for (row_idx, row) in snapshot.rows.iter().enumerate() {
        let mut ticker: Option<Ticker> = None;
        let mut price: Option<Decimal> = None;
        let mut values: Vec<(Indicator, Option<Decimal>)> = Vec::new();

        for (label, cell) in row {
            let key = columns::resolve_label(label);
            if key == TICKER_KEY {
                saw_ticker_column = true;
                ticker = parse_ticker(cell);
            } else if key == PRICE_KEY {
                price = parse_numeric(cell);
            } else if let Some(indicator) = Indicator::from_key(&key) {
                let value = if indicator.is_proportion() {
                    parse_proportion(cell)
                } else {
                    parse_numeric(cell)
                };
                values.push((indicator, value));
            }
        }

        let Some(ticker) = ticker.filter(|t| !t.is_empty()) else {
            warn!("Dropping row {row_idx}: no usable ticker");
            continue;
        };

        let mut record = IndicatorRecord::new(ticker);
        record.price = price;
        for (indicator, value) in values {
            record.set(indicator, value);
        }
        records.push(record);
    }

    if !saw_ticker_column {
        return Err(IngestError::MissingTickerColumn);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minerva_core::RawRecord;

    fn row(cells: &[(&str, &str)]) -> RawRecord {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn snapshot(rows: Vec<RawRecord>) -> RawSnapshot {
        RawSnapshot::new(rows)
    }

    #[test]
    fn test_dash_is_missing() {
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric(" - "), None);
        assert_eq!(parse_numeric(""), None);
    }

    #[test]
    fn test_negative_is_not_missing() {
        assert_eq!(parse_numeric("-3,50"), Some(dec!(-3.50)));
        assert_eq!(parse_numeric("-3,2"), Some(dec!(-3.2)));
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(parse_numeric("12.345,67"), Some(dec!(12345.67)));
        assert_eq!(parse_numeric("1.234"), Some(dec!(1234)));
    }

    #[test]
    fn test_percent_proportion() {
        assert_eq!(parse_proportion("7,5%"), Some(dec!(0.075)));
        // The unit is standardized whether or not the sign is present
        assert_eq!(parse_proportion("7,5"), Some(dec!(0.075)));
        assert_eq!(parse_proportion("-12,3%"), Some(dec!(-0.123)));
    }

    #[test]
    fn test_garbage_degrades_to_missing() {
        assert_eq!(parse_numeric("n/d"), None);
        assert_eq!(parse_numeric("--"), None);
    }

    #[test]
    fn test_ticker_normalization() {
        assert_eq!(parse_ticker(" petr4 "), Some(Ticker::new("PETR4")));
        assert_eq!(parse_ticker("-"), None);
        assert_eq!(parse_ticker("  "), None);
    }

    #[test]
    fn test_parse_snapshot_basic() {
        let snap = snapshot(vec![row(&[
            ("Papel", "vale3"),
            ("Cotação", "61,20"),
            ("P/L", "5,4"),
            ("Div.Yield", "8,1%"),
            ("ROE", "18,0%"),
            ("Liq.2meses", "1.234.567,00"),
        ])]);

        let records = parse_snapshot(&snap).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.ticker.as_str(), "VALE3");
        assert_eq!(r.price, Some(dec!(61.20)));
        assert_eq!(r.get(Indicator::PriceEarnings), Some(dec!(5.4)));
        assert_eq!(r.get(Indicator::DividendYield), Some(dec!(0.081)));
        assert_eq!(r.get(Indicator::Roe), Some(dec!(0.180)));
        assert_eq!(r.get(Indicator::AvgVolume), Some(dec!(1234567.00)));
        // Columns never seen stay explicitly missing
        assert_eq!(r.get(Indicator::DebtToEquity), None);
    }

    #[test]
    fn test_bad_cell_does_not_abort_row() {
        let snap = snapshot(vec![row(&[("Papel", "VALE3"), ("P/L", "err")])]);
        let records = parse_snapshot(&snap).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(Indicator::PriceEarnings), None);
    }

    #[test]
    fn test_row_without_ticker_is_dropped() {
        let snap = snapshot(vec![
            row(&[("Papel", "VALE3"), ("P/L", "5,4")]),
            row(&[("Papel", "-"), ("P/L", "3,0")]),
        ]);
        let records = parse_snapshot(&snap).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ticker.as_str(), "VALE3");
    }

    #[test]
    fn test_missing_ticker_column_is_structural() {
        let snap = snapshot(vec![row(&[("P/L", "5,4")])]);
        assert_eq!(
            parse_snapshot(&snap),
            Err(IngestError::MissingTickerColumn)
        );
    }

    #[test]
    fn test_empty_snapshot_is_empty_output() {
        let snap = snapshot(vec![]);
        assert_eq!(parse_snapshot(&snap).unwrap(), Vec::new());
    }

    #[test]
    fn test_unknown_columns_are_ignored() {
        let snap = snapshot(vec![row(&[("Papel", "VALE3"), ("Coluna Nova", "1,0")])]);
        let records = parse_snapshot(&snap).unwrap();
        assert!(records[0].extras.is_empty());
    }
}
