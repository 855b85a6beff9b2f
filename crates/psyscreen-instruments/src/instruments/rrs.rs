use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_core::models::tier::SeverityTier;

use crate::scoring::{ScoreRange, SeverityRange};
use crate::Instrument;

/// RRS: Ruminative Responses Scale, brooding index.
/// 10 items rated 1–4. Total 10–40.
pub struct Rrs;

impl Instrument for Rrs {
    fn id(&self) -> InstrumentId {
        InstrumentId::Rrs
    }

    fn name(&self) -> &str {
        "RRS: Ruminative Responses Scale (brooding)"
    }

    fn domain(&self) -> ScoreRange {
        ScoreRange::new(10.0, 40.0)
    }

    fn ranges(&self) -> &[SeverityRange] {
        static RANGES: std::sync::LazyLock<Vec<SeverityRange>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityRange::new(19.0, SeverityTier::Low, "Low ruminative tendency"),
                SeverityRange::new(29.0, SeverityTier::Moderate, "Moderate ruminative tendency"),
                SeverityRange::new(40.0, SeverityTier::High, "High ruminative tendency"),
            ]
        });
        &RANGES
    }
}
