use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::instrument::InstrumentId;

/// The resolved clinical profile for a subject. Variants are listed in
/// precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProfileId {
    Crisis,
    MixedAnxiousDepressive,
    DepressionDominant,
    AnxietyDominant,
    Baseline,
}

impl ProfileId {
    /// Triage priority, 1 = most urgent.
    pub const fn priority(self) -> u8 {
        match self {
            ProfileId::Crisis => 1,
            ProfileId::MixedAnxiousDepressive => 2,
            ProfileId::DepressionDominant => 3,
            ProfileId::AnxietyDominant => 4,
            ProfileId::Baseline => 5,
        }
    }

    /// Stable wire code, identical to the serde representation.
    pub const fn code(self) -> &'static str {
        match self {
            ProfileId::Crisis => "crisis",
            ProfileId::MixedAnxiousDepressive => "mixed_anxious_depressive",
            ProfileId::DepressionDominant => "depression_dominant",
            ProfileId::AnxietyDominant => "anxiety_dominant",
            ProfileId::Baseline => "baseline",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProfileId::Crisis => "Crisis",
            ProfileId::MixedAnxiousDepressive => "Mixed anxious-depressive",
            ProfileId::DepressionDominant => "Depression dominant",
            ProfileId::AnxietyDominant => "Anxiety dominant",
            ProfileId::Baseline => "Baseline",
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalProfile {
    pub id: ProfileId,
    pub rationale: String,
    /// Instruments that drove the chosen branch.
    pub triggering_instruments: BTreeSet<InstrumentId>,
    pub recommended_focus: String,
}
