use thiserror::Error;

/// Structural failures of the raw snapshot
///
/// Per-cell and per-row problems degrade instead (missing values, dropped
/// rows); only a snapshot the parser cannot orient itself in is an error.
/// Zero rows is a legitimate empty result, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("Ticker column missing from a non-empty snapshot")]
    MissingTickerColumn,
}

pub type IngestResult<T> = std::result::Result<T, IngestError>;
