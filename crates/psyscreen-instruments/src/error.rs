use thiserror::Error;

use psyscreen_core::models::instrument::InstrumentId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument}: score {score} is outside domain [{min}, {max}]")]
    ScoreOutOfDomain {
        instrument: InstrumentId,
        score: f64,
        min: f64,
        max: f64,
    },
}
