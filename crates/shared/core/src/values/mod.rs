use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weighted score value - uses Decimal for precision
pub type Score = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Ticker symbol for a listed security (e.g. `PETR4`)
///
/// This provides a stable reference to a security that can be used as a
/// map key without carrying the full record. Construction normalizes to
/// the canonical form: trimmed, uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    /// Create a ticker, normalizing to trimmed uppercase
    pub fn new(symbol: impl AsRef<str>) -> Self {
        Self(symbol.as_ref().trim().to_uppercase())
    }

    /// Get the ticker as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ticker is empty after normalization (rejected by ingestion)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Issuer prefix: the first four characters of the ticker
    ///
    /// Multiple listing classes of one issuer share this prefix
    /// (`PETR3`/`PETR4` -> `PETR`). Shorter tickers are their own prefix.
    pub fn issuer_prefix(&self) -> String {
        self.0.chars().take(4).collect()
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
