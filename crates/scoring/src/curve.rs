//! Step-function scoring curves
//!
//! Each filter grades its indicator through an explicit breakpoint table.
//! Curves are data, not code: serializable, auditable and overridable by
//! the orchestrator.

use minerva_core::Score;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One breakpoint: a bound and the score granted inside it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub bound: Decimal,
    pub score: Score,
}

impl Band {
    pub fn new(bound: Decimal, score: Score) -> Self {
        Self { bound, score }
    }
}

/// Graded step function mapping an indicator value to a score in [0, 1]
///
/// Bands are evaluated in declaration order; the first band that admits the
/// value decides the score, and a value no band admits scores zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum StepCurve {
    /// Positive values score the first band with `value <= bound`;
    /// non-positive values score zero. Bounds ascend. Shape of the
    /// cheapness ratios (P/L, EV/EBIT, ...), where a non-positive ratio
    /// means losses, not value.
    UpTo { bands: Vec<Band> },
    /// Values score the first band with `value > bound`. Bounds descend.
    /// Shape of yields, returns and margins.
    Over { bands: Vec<Band> },
    /// Values score the first band with `value < bound`. Bounds ascend.
    /// Shape of leverage ratios, where lower is better and negative
    /// values are admissible.
    Under { bands: Vec<Band> },
}

impl StepCurve {
    /// Grade a value against the breakpoint table
    pub fn score(&self, value: Decimal) -> Score {
        match self {
            StepCurve::UpTo { bands } => {
                if value <= Decimal::ZERO {
                    return Score::ZERO;
                }
                Self::first_match(bands, |b| value <= b.bound)
            }
            StepCurve::Over { bands } => Self::first_match(bands, |b| value > b.bound),
            StepCurve::Under { bands } => Self::first_match(bands, |b| value < b.bound),
        }
    }

    fn first_match(bands: &[Band], admit: impl Fn(&Band) -> bool) -> Score {
        bands
            .iter()
            .find(|&b| admit(b))
            .map(|b| b.score)
            .unwrap_or(Score::ZERO)
    }
}
