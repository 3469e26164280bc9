//! ScaleCorrector - repairs known upstream magnitude anomalies
//!
//! The scrape occasionally ships prices multiplied by 100 and the P/Ativo
//! and PSR ratios multiplied by 1000. The thresholds below are part of the
//! historical reproducibility contract; they must not drift.

use minerva_core::{Indicator, IndicatorRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Ratio fields subject to the x1000 anomaly
const SCALED_RATIOS: [Indicator; 2] = [Indicator::PriceAssets, Indicator::PriceSales];

/// Repair a quoted price: above 1000, or above 100 with no fractional
/// part, the value arrived multiplied by 100. An unrepresentable division
/// result becomes missing.
pub fn correct_price(price: Decimal) -> Option<Decimal> {
    if price > dec!(1000) || (price > dec!(100) && price.is_integer()) {
        price.checked_div(dec!(100))
    } else {
        Some(price)
    }
}

/// Repair a P/Ativo or PSR ratio: above 100 the value arrived multiplied
/// by 1000
pub fn correct_ratio(value: Decimal) -> Option<Decimal> {
    if value > dec!(100) {
        value.checked_div(dec!(1000))
    } else {
        Some(value)
    }
}

/// Apply both corrections across freshly parsed records
pub fn correct(mut records: Vec<IndicatorRecord>) -> Vec<IndicatorRecord> {
    for record in &mut records {
        record.price = record.price.and_then(correct_price);
        for indicator in SCALED_RATIOS {
            let corrected = record.get(indicator).and_then(correct_ratio);
            record.set(indicator, corrected);
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use minerva_core::Ticker;

    #[test]
    fn test_price_above_1000() {
        assert_eq!(correct_price(dec!(1000.0)), Some(dec!(10.0)));
        assert_eq!(correct_price(dec!(6150)), Some(dec!(61.5)));
    }

    #[test]
    fn test_price_whole_number_above_100() {
        assert_eq!(correct_price(dec!(250.0)), Some(dec!(2.5)));
        assert_eq!(correct_price(dec!(101)), Some(dec!(1.01)));
    }

    #[test]
    fn test_price_with_fraction_is_kept() {
        assert_eq!(correct_price(dec!(250.5)), Some(dec!(250.5)));
        assert_eq!(correct_price(dec!(99.9)), Some(dec!(99.9)));
        assert_eq!(correct_price(dec!(100)), Some(dec!(100)));
    }

    #[test]
    fn test_ratio_thresholds() {
        assert_eq!(correct_ratio(dec!(150)), Some(dec!(0.15)));
        assert_eq!(correct_ratio(dec!(99)), Some(dec!(99)));
        assert_eq!(correct_ratio(dec!(100)), Some(dec!(100)));
        assert_eq!(correct_ratio(dec!(100.5)), Some(dec!(0.1005)));
    }

    #[test]
    fn test_correct_records() {
        let mut record = IndicatorRecord::new(Ticker::new("VALE3"));
        record.price = Some(dec!(6120));
        record.set(Indicator::PriceAssets, Some(dec!(820)));
        record.set(Indicator::PriceSales, Some(dec!(1.4)));

        let corrected = correct(vec![record]);
        let r = &corrected[0];
        assert_eq!(r.price, Some(dec!(61.20)));
        assert_eq!(r.get(Indicator::PriceAssets), Some(dec!(0.82)));
        assert_eq!(r.get(Indicator::PriceSales), Some(dec!(1.4)));
    }

    #[test]
    fn test_missing_stays_missing() {
        let record = IndicatorRecord::new(Ticker::new("VALE3"));
        let corrected = correct(vec![record]);
        assert_eq!(corrected[0].price, None);
        assert_eq!(corrected[0].get(Indicator::PriceAssets), None);
    }
}
