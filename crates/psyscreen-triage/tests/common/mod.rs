#![allow(dead_code)]

use psyscreen_core::models::evaluation::EvaluationResult;
use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_instruments::normalize::normalize_score;
use psyscreen_instruments::registry::Registry;

pub fn date() -> jiff::Timestamp {
    "2026-03-01T10:00:00Z".parse().unwrap()
}

/// Classify a score through the standard registry.
pub fn result(instrument: InstrumentId, raw_score: f64) -> EvaluationResult {
    normalize_score(Registry::global(), instrument, raw_score, date()).unwrap()
}
