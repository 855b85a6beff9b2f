use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The closed set of instruments the engine knows how to classify.
///
/// Each variant has exactly one threshold table in `psyscreen-instruments`.
/// The serialized form is the stable wire code (e.g. `"gad7"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentId {
    /// Generalized Anxiety Disorder 7-item scale.
    Gad7,
    /// Patient Health Questionnaire, 9-item depression module.
    Phq9,
    /// Penn State Worry Questionnaire.
    Pswq,
    /// Ruminative Responses Scale, brooding index.
    Rrs,
    /// Automatic Thoughts Questionnaire, 30-item.
    Atq30,
    /// Beck Scale for Suicide Ideation.
    Bss,
    /// Autism Spectrum Quotient, 10-item screen.
    Aq10,
}

/// What an instrument measures. Triage picks results by construct, so the
/// core pair is whichever instruments measure depression and anxiety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Construct {
    Anxiety,
    Depression,
    WorryTrait,
    RuminationTrait,
    NegativeThoughts,
    SuicidalIdeation,
    AutismScreen,
}

impl Construct {
    pub const fn label(self) -> &'static str {
        match self {
            Construct::Anxiety => "anxiety measure",
            Construct::Depression => "depression measure",
            Construct::WorryTrait => "trait worry measure",
            Construct::RuminationTrait => "rumination measure",
            Construct::NegativeThoughts => "automatic thoughts measure",
            Construct::SuicidalIdeation => "suicidal ideation measure",
            Construct::AutismScreen => "autism screen",
        }
    }
}

impl InstrumentId {
    pub const ALL: [InstrumentId; 7] = [
        InstrumentId::Gad7,
        InstrumentId::Phq9,
        InstrumentId::Pswq,
        InstrumentId::Rrs,
        InstrumentId::Atq30,
        InstrumentId::Bss,
        InstrumentId::Aq10,
    ];

    /// Stable wire code, identical to the serde representation.
    pub const fn code(self) -> &'static str {
        match self {
            InstrumentId::Gad7 => "gad7",
            InstrumentId::Phq9 => "phq9",
            InstrumentId::Pswq => "pswq",
            InstrumentId::Rrs => "rrs",
            InstrumentId::Atq30 => "atq30",
            InstrumentId::Bss => "bss",
            InstrumentId::Aq10 => "aq10",
        }
    }

    /// Short clinical abbreviation used in rationale text.
    pub const fn label(self) -> &'static str {
        match self {
            InstrumentId::Gad7 => "GAD-7",
            InstrumentId::Phq9 => "PHQ-9",
            InstrumentId::Pswq => "PSWQ",
            InstrumentId::Rrs => "RRS",
            InstrumentId::Atq30 => "ATQ-30",
            InstrumentId::Bss => "BSS",
            InstrumentId::Aq10 => "AQ-10",
        }
    }

    pub const fn construct(self) -> Construct {
        match self {
            InstrumentId::Gad7 => Construct::Anxiety,
            InstrumentId::Phq9 => Construct::Depression,
            InstrumentId::Pswq => Construct::WorryTrait,
            InstrumentId::Rrs => Construct::RuminationTrait,
            InstrumentId::Atq30 => Construct::NegativeThoughts,
            InstrumentId::Bss => Construct::SuicidalIdeation,
            InstrumentId::Aq10 => Construct::AutismScreen,
        }
    }

    /// The instrument measuring `construct`, if any.
    pub fn measuring(construct: Construct) -> Option<InstrumentId> {
        InstrumentId::ALL
            .into_iter()
            .find(|id| id.construct() == construct)
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for InstrumentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        InstrumentId::ALL
            .into_iter()
            .find(|id| id.code() == code)
            .ok_or_else(|| CoreError::UnknownInstrument(s.to_string()))
    }
}
