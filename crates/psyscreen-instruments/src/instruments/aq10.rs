use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_core::models::tier::SeverityTier;

use crate::scoring::{ScoreRange, SeverityRange};
use crate::Instrument;

/// AQ-10: Autism Spectrum Quotient, 10-item adult screen.
/// One point per item. Total 0–10. A score of 6 or more is a positive screen.
pub struct Aq10;

impl Instrument for Aq10 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Aq10
    }

    fn name(&self) -> &str {
        "AQ-10: Autism Spectrum Quotient"
    }

    fn domain(&self) -> ScoreRange {
        ScoreRange::new(0.0, 10.0)
    }

    fn ranges(&self) -> &[SeverityRange] {
        static RANGES: std::sync::LazyLock<Vec<SeverityRange>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityRange::new(5.0, SeverityTier::Negative, "Below screening threshold"),
                SeverityRange::new(
                    10.0,
                    SeverityTier::Positive,
                    "Positive screen; consider referral for specialist autism assessment",
                ),
            ]
        });
        &RANGES
    }
}
