use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Severity classification assigned to one instrument score.
///
/// Three tier families share this enum:
/// - graded: Minimal < Mild < Moderate < ModeratelySevere < Severe
/// - trait: Low < Moderate < High
/// - binary screen: Negative / Positive
///
/// Tiers from different families are compared through [`SeverityTier::rank`],
/// which places every tier on the shared Minimal–Severe scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTier {
    Minimal,
    Low,
    Mild,
    Moderate,
    ModeratelySevere,
    High,
    Severe,
    Negative,
    Positive,
}

impl SeverityTier {
    /// Rank on the shared scale (0 = Minimal … 4 = Severe).
    pub const fn rank(self) -> u8 {
        match self {
            SeverityTier::Minimal | SeverityTier::Low | SeverityTier::Negative => 0,
            SeverityTier::Mild => 1,
            SeverityTier::Moderate | SeverityTier::Positive => 2,
            SeverityTier::ModeratelySevere | SeverityTier::High => 3,
            SeverityTier::Severe => 4,
        }
    }

    /// True when the tier is at or above Mild on the shared scale.
    pub const fn is_elevated(self) -> bool {
        self.rank() >= SeverityTier::Mild.rank()
    }

    pub const fn label(self) -> &'static str {
        match self {
            SeverityTier::Minimal => "Minimal",
            SeverityTier::Low => "Low",
            SeverityTier::Mild => "Mild",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::ModeratelySevere => "Moderately severe",
            SeverityTier::High => "High",
            SeverityTier::Severe => "Severe",
            SeverityTier::Negative => "Negative",
            SeverityTier::Positive => "Positive",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
