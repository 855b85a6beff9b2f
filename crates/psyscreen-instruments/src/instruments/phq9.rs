use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_core::models::tier::SeverityTier;

use crate::scoring::{ScoreRange, SeverityRange};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items rated 0–3. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9: Patient Health Questionnaire"
    }

    fn domain(&self) -> ScoreRange {
        ScoreRange::new(0.0, 27.0)
    }

    fn ranges(&self) -> &[SeverityRange] {
        static RANGES: std::sync::LazyLock<Vec<SeverityRange>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityRange::new(4.0, SeverityTier::Minimal, "Minimal or no depression"),
                SeverityRange::new(9.0, SeverityTier::Mild, "Mild depression"),
                SeverityRange::new(14.0, SeverityTier::Moderate, "Moderate depression"),
                SeverityRange::new(
                    19.0,
                    SeverityTier::ModeratelySevere,
                    "Moderately severe depression",
                ),
                SeverityRange::new(27.0, SeverityTier::Severe, "Severe depression"),
            ]
        });
        &RANGES
    }
}
