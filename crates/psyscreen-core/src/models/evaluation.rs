use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::instrument::InstrumentId;
use crate::models::tier::SeverityTier;

/// One raw score as received from the results-collection layer.
///
/// `instrument` is the wire code and is not trusted: it is validated when
/// the submission is normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreSubmission {
    pub instrument: String,
    pub raw_score: f64,
    pub date: jiff::Timestamp,
}

/// All raw scores collected for one subject in one evaluation episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionSet {
    pub subject_id: Uuid,
    pub episode_id: Uuid,
    pub submissions: Vec<ScoreSubmission>,
}

impl SubmissionSet {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Canonical classification of one instrument administration.
///
/// `acute_risk` is only ever set by an instrument carrying a risk rule and
/// does not follow from `tier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationResult {
    pub instrument: InstrumentId,
    pub date: jiff::Timestamp,
    pub raw_score: f64,
    pub tier: SeverityTier,
    pub acute_risk: bool,
    pub note: String,
}

/// Evaluation results for one subject and episode. Owned by the caller;
/// the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientResultSet {
    pub subject_id: Uuid,
    pub episode_id: Uuid,
    pub results: Vec<EvaluationResult>,
}

impl PatientResultSet {
    pub fn new(subject_id: Uuid, episode_id: Uuid, results: Vec<EvaluationResult>) -> Self {
        Self {
            subject_id,
            episode_id,
            results,
        }
    }
}
