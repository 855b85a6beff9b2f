//! Result normalization.
//!
//! Turns an untrusted `{instrument, raw_score, date}` submission into a
//! canonical [`EvaluationResult`], or explains why it cannot.

use psyscreen_core::models::evaluation::{EvaluationResult, ScoreSubmission};
use psyscreen_core::models::instrument::InstrumentId;

use crate::error::InstrumentError;
use crate::registry::Registry;

/// Validate and classify one submission.
///
/// Fails with `UnknownInstrument` when the code does not parse or the
/// instrument is not registered, and with `ScoreOutOfDomain` when a
/// non-clamping instrument receives an impossible score.
pub fn normalize(
    registry: &Registry,
    submission: &ScoreSubmission,
) -> Result<EvaluationResult, InstrumentError> {
    let id: InstrumentId = submission
        .instrument
        .parse()
        .map_err(|_| InstrumentError::UnknownInstrument(submission.instrument.clone()))?;
    normalize_score(registry, id, submission.raw_score, submission.date)
}

/// Classify a raw score for an already identified instrument.
pub fn normalize_score(
    registry: &Registry,
    id: InstrumentId,
    raw_score: f64,
    date: jiff::Timestamp,
) -> Result<EvaluationResult, InstrumentError> {
    let instrument = registry
        .get(id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))?;

    let classification = instrument.classify(raw_score)?;
    let acute_risk = instrument
        .risk_rule()
        .is_some_and(|rule| rule.is_acute(raw_score));

    let mut note = classification.description;
    if let Some(original) = classification.clamped_from {
        note.push_str(&format!(
            " (score {original} clamped to {})",
            classification.effective_score
        ));
    }
    if classification.ceiling {
        note.push_str(" (score exceeds table maximum)");
    }

    Ok(EvaluationResult {
        instrument: id,
        date,
        raw_score,
        tier: classification.tier,
        acute_risk,
        note,
    })
}
