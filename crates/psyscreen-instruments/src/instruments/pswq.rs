use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_core::models::tier::SeverityTier;

use crate::scoring::{ScoreRange, SeverityRange};
use crate::Instrument;

/// PSWQ: Penn State Worry Questionnaire.
/// 16 items rated 1–5 (11 direct, 5 reverse-scored). Total 16–80.
/// Measures trait worry, not a current-episode severity.
pub struct Pswq;

impl Instrument for Pswq {
    fn id(&self) -> InstrumentId {
        InstrumentId::Pswq
    }

    fn name(&self) -> &str {
        "PSWQ: Penn State Worry Questionnaire"
    }

    fn domain(&self) -> ScoreRange {
        ScoreRange::new(16.0, 80.0)
    }

    fn ranges(&self) -> &[SeverityRange] {
        static RANGES: std::sync::LazyLock<Vec<SeverityRange>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityRange::new(39.0, SeverityTier::Low, "Low trait worry"),
                SeverityRange::new(59.0, SeverityTier::Moderate, "Moderate trait worry"),
                SeverityRange::new(
                    80.0,
                    SeverityTier::High,
                    "High trait worry, consistent with pathological worry",
                ),
            ]
        });
        &RANGES
    }
}
