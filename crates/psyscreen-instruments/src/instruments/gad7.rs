use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_core::models::tier::SeverityTier;

use crate::scoring::{ScoreRange, SeverityRange};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items rated 0–3. Total 0–21. Cut points 5, 10, 15.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7: Generalized Anxiety Disorder scale"
    }

    fn domain(&self) -> ScoreRange {
        ScoreRange::new(0.0, 21.0)
    }

    fn ranges(&self) -> &[SeverityRange] {
        static RANGES: std::sync::LazyLock<Vec<SeverityRange>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityRange::new(4.0, SeverityTier::Minimal, "Minimal anxiety symptoms"),
                SeverityRange::new(9.0, SeverityTier::Mild, "Mild anxiety symptoms"),
                SeverityRange::new(
                    14.0,
                    SeverityTier::Moderate,
                    "Moderate anxiety; probable generalized anxiety disorder",
                ),
                SeverityRange::new(21.0, SeverityTier::Severe, "Severe anxiety symptoms"),
            ]
        });
        &RANGES
    }
}
