use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;
use uuid::Uuid;

use psyscreen_core::models::evaluation::{EvaluationResult, PatientResultSet, SubmissionSet};
use psyscreen_core::models::profile::ClinicalProfile;
use psyscreen_instruments::error::InstrumentError;
use psyscreen_instruments::normalize::normalize;
use psyscreen_instruments::registry::Registry;

use crate::annotate::annotate;
use crate::resolve::resolve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RejectionKind {
    UnknownInstrument,
    ScoreOutOfDomain,
}

/// A submission that could not be normalized. Surfaced to the caller as a
/// data-quality warning; it never reaches the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RejectedSubmission {
    pub instrument: String,
    pub raw_score: f64,
    pub kind: RejectionKind,
    pub message: String,
}

/// Everything handed to the report layer for one subject and episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub subject_id: Uuid,
    pub episode_id: Uuid,
    pub results: Vec<EvaluationResult>,
    pub rejected: Vec<RejectedSubmission>,
    pub profile: ClinicalProfile,
}

/// Normalize every submission, then resolve and annotate the profile from
/// the ones that succeeded.
pub fn assess(registry: &Registry, submissions: &SubmissionSet) -> Assessment {
    let mut results = Vec::with_capacity(submissions.submissions.len());
    let mut rejected = Vec::new();

    for submission in &submissions.submissions {
        match normalize(registry, submission) {
            Ok(result) => results.push(result),
            Err(e) => {
                warn!(
                    subject_id = %submissions.subject_id,
                    instrument = %submission.instrument,
                    error = %e,
                    "submission rejected"
                );
                let kind = match e {
                    InstrumentError::UnknownInstrument(_) => RejectionKind::UnknownInstrument,
                    InstrumentError::ScoreOutOfDomain { .. } => RejectionKind::ScoreOutOfDomain,
                };
                rejected.push(RejectedSubmission {
                    instrument: submission.instrument.clone(),
                    raw_score: submission.raw_score,
                    kind,
                    message: e.to_string(),
                });
            }
        }
    }

    let result_set = PatientResultSet::new(submissions.subject_id, submissions.episode_id, results);
    let profile = evaluate(&result_set);

    Assessment {
        subject_id: result_set.subject_id,
        episode_id: result_set.episode_id,
        results: result_set.results,
        rejected,
        profile,
    }
}

/// Resolve and annotate the profile for an already normalized result set.
pub fn evaluate(result_set: &PatientResultSet) -> ClinicalProfile {
    let profile = resolve(&result_set.results);
    annotate(&profile, &result_set.results)
}
