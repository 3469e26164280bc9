//! Minerva Core Domain
//!
//! Pure domain types for the Minerva fundamental scoring engine.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Cached detail overlay
    CachedDetail,
    // Canonical indicator keys
    Indicator,
    IndicatorRecord,
    // Pipeline output
    RankedSnapshot,
    // Raw input
    RawRecord,
    RawSnapshot,
    // Risk tags
    RiskFlag,
    ScoredRecord,
    UNKNOWN_SECTOR,
};
pub use values::{Score, Ticker, Timestamp};
