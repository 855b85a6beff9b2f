use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_core::models::tier::SeverityTier;

use crate::risk::{RiskRule, SUICIDE_IDEATION_THRESHOLD};
use crate::scoring::{ScoreRange, SeverityRange};
use crate::Instrument;

/// BSS: Beck Scale for Suicide Ideation.
/// 19 items rated 0–2. Total 0–38.
///
/// Scores are never clamped: a value outside 0–38 means the upstream sum is
/// wrong and is rejected so that it surfaces as a data-quality problem.
/// Acute risk is raised at 6 and above, which lands inside the Moderate
/// tier.
pub struct Bss;

impl Instrument for Bss {
    fn id(&self) -> InstrumentId {
        InstrumentId::Bss
    }

    fn name(&self) -> &str {
        "BSS: Beck Scale for Suicide Ideation"
    }

    fn domain(&self) -> ScoreRange {
        ScoreRange::new(0.0, 38.0)
    }

    fn clamps(&self) -> bool {
        false
    }

    fn ranges(&self) -> &[SeverityRange] {
        static RANGES: std::sync::LazyLock<Vec<SeverityRange>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityRange::new(0.0, SeverityTier::Minimal, "No suicidal ideation reported"),
                SeverityRange::new(5.0, SeverityTier::Mild, "Passive suicidal ideation"),
                SeverityRange::new(9.0, SeverityTier::Moderate, "Active suicidal ideation"),
                SeverityRange::new(
                    38.0,
                    SeverityTier::Severe,
                    "Active suicidal ideation with intent or planning",
                ),
            ]
        });
        &RANGES
    }

    fn risk_rule(&self) -> Option<RiskRule> {
        Some(RiskRule::new(SUICIDE_IDEATION_THRESHOLD))
    }
}
