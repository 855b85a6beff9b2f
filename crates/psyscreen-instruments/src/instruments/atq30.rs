use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_core::models::tier::SeverityTier;

use crate::scoring::{ScoreRange, SeverityRange};
use crate::Instrument;

/// ATQ-30: Automatic Thoughts Questionnaire.
/// 30 items rated 1–5 on frequency of negative self-statements. Total 30–150.
pub struct Atq30;

impl Instrument for Atq30 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Atq30
    }

    fn name(&self) -> &str {
        "ATQ-30: Automatic Thoughts Questionnaire"
    }

    fn domain(&self) -> ScoreRange {
        ScoreRange::new(30.0, 150.0)
    }

    fn ranges(&self) -> &[SeverityRange] {
        static RANGES: std::sync::LazyLock<Vec<SeverityRange>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityRange::new(50.0, SeverityTier::Minimal, "Negative thoughts within normal range"),
                SeverityRange::new(70.0, SeverityTier::Mild, "Somewhat frequent negative thoughts"),
                SeverityRange::new(90.0, SeverityTier::Moderate, "Frequent negative automatic thoughts"),
                SeverityRange::new(
                    150.0,
                    SeverityTier::Severe,
                    "Very frequent negative automatic thoughts",
                ),
            ]
        });
        &RANGES
    }
}
