//! Acute-risk rules.
//!
//! A risk rule is evaluated on the raw score alone. It does not look at the
//! severity tier, so a score in a middle tier can still raise the flag.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// BSS raw score at or above which acute suicide risk is asserted.
pub const SUICIDE_IDEATION_THRESHOLD: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskRule {
    pub threshold: f64,
}

impl RiskRule {
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn is_acute(&self, raw_score: f64) -> bool {
        raw_score >= self.threshold
    }
}
