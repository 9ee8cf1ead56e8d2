//! Temporal estimates and their resolution to a single comparable year.
//!
//! Every recognizer in the cascade produces a [`TemporalEstimate`]: either a
//! point year or an inclusive year interval, always stored as signed years
//! (BCE negative). The resolver collapses an estimate to the one rational
//! number used for period lookup and timeline plotting.

use serde::Serialize;

// ── Era flag ─────────────────────────────────────────────────────────

/// Which era a recognizer matched. Determines the sign of the final year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EraSign {
    Bce,
    Ce,
}

impl EraSign {
    /// Sign an unsigned year magnitude.
    pub fn apply(self, magnitude: f64) -> f64 {
        match self {
            Self::Bce => -magnitude,
            Self::Ce => magnitude,
        }
    }

    /// Era implied by an optional BC/AD suffix capture. Absent or
    /// unrecognized suffixes default to CE.
    pub fn from_suffix(suffix: Option<&str>) -> Self {
        match suffix {
            Some(s) if s.to_ascii_uppercase().contains("BC") => Self::Bce,
            _ => Self::Ce,
        }
    }
}

// ── Estimate ─────────────────────────────────────────────────────────

/// The result of a single recognizer match.
///
/// Interval bounds are actual signed years, so `low <= high` holds for both
/// eras once signs are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum TemporalEstimate {
    Point(f64),
    Interval { low: f64, high: f64 },
}

impl TemporalEstimate {
    /// Build an interval from two signed bounds given in either order.
    pub fn interval(a: f64, b: f64) -> Self {
        if a <= b {
            Self::Interval { low: a, high: b }
        } else {
            Self::Interval { low: b, high: a }
        }
    }
}

// ── Resolved year ────────────────────────────────────────────────────

/// The canonical point-in-time value produced by the resolver.
///
/// `Unknown` is a first-class value: consumers must branch on it, and it is
/// serialized with an explicit status tag rather than as NaN or an empty
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value")]
pub enum ResolvedYear {
    Known(f64),
    Unknown,
}

impl ResolvedYear {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Collapse an estimate to its representative point.
///
/// A point passes through unchanged, an interval resolves to its arithmetic
/// midpoint (sign preserved), and a failed extraction maps to `Unknown`.
pub fn resolve(estimate: Option<TemporalEstimate>) -> ResolvedYear {
    match estimate {
        Some(TemporalEstimate::Point(y)) => ResolvedYear::Known(y),
        Some(TemporalEstimate::Interval { low, high }) => ResolvedYear::Known((low + high) / 2.0),
        None => ResolvedYear::Unknown,
    }
}
