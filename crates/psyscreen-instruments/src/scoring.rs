use serde::{Deserialize, Serialize};
use ts_rs::TS;

use psyscreen_core::models::tier::SeverityTier;

/// The nominal raw-score domain of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Pull `value` onto the nearest bound. Callers must reject non-finite
    /// values first.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// One row of a threshold table: every score up to and including
/// `upper_bound` (and above the previous row's bound) gets `tier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityRange {
    pub upper_bound: f64,
    pub tier: SeverityTier,
    pub description: String,
}

impl SeverityRange {
    pub fn new(upper_bound: f64, tier: SeverityTier, description: &str) -> Self {
        Self {
            upper_bound,
            tier,
            description: description.to_string(),
        }
    }
}

/// Outcome of looking a score up in an instrument's table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub tier: SeverityTier,
    pub description: String,
    /// The score that was actually looked up (after clamping).
    pub effective_score: f64,
    /// The original score when it had to be clamped into the domain.
    pub clamped_from: Option<f64>,
    /// Set when the score exceeded every upper bound and the highest range
    /// was used as the fallback.
    pub ceiling: bool,
}

/// Find the first range whose upper bound is at or above `score`.
///
/// Falls back to the last range (flagged as a ceiling match) when the score
/// exceeds the table. Returns `None` only for an empty table.
pub fn lookup(ranges: &[SeverityRange], score: f64) -> Option<(&SeverityRange, bool)> {
    match ranges.iter().find(|r| r.upper_bound >= score) {
        Some(range) => Some((range, false)),
        None => ranges.last().map(|range| (range, true)),
    }
}
