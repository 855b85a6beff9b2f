//! Triage resolver.
//!
//! Precedence, highest first:
//! 1. any acute-risk result → Crisis (nothing else is consulted)
//! 2. PHQ-9 and GAD-7 both at or above Mild → MixedAnxiousDepressive
//! 3. the strictly higher of PHQ-9 / GAD-7 → DepressionDominant / AnxietyDominant
//! 4. otherwise → Baseline
//!
//! The core pair is selected by construct: the depression measure and the
//! anxiety measure. Rules 2 and 3 need both. A set missing either one
//! resolves to Baseline, names the absent instrument and reports the core
//! result that is present.

use std::collections::BTreeSet;

use tracing::debug;

use psyscreen_core::models::evaluation::EvaluationResult;
use psyscreen_core::models::instrument::{Construct, InstrumentId};
use psyscreen_core::models::profile::{ClinicalProfile, ProfileId};

pub const DEPRESSION: Construct = Construct::Depression;
pub const ANXIETY: Construct = Construct::Anxiety;

/// Resolve a result set into its clinical profile. Never fails.
pub fn resolve(results: &[EvaluationResult]) -> ClinicalProfile {
    let profile = resolve_profile(results);
    debug!(
        profile = ?profile.id,
        triggers = ?profile.triggering_instruments,
        results = results.len(),
        "resolved clinical profile"
    );
    profile
}

fn resolve_profile(results: &[EvaluationResult]) -> ClinicalProfile {
    let acute: BTreeSet<InstrumentId> = results
        .iter()
        .filter(|r| r.acute_risk)
        .map(|r| r.instrument)
        .collect();
    if !acute.is_empty() {
        return crisis(results, acute);
    }

    if results.is_empty() {
        return baseline(
            "No instrument results were supplied.".to_string(),
            BTreeSet::new(),
        );
    }

    let depression = peak_of(results, DEPRESSION);
    let anxiety = peak_of(results, ANXIETY);
    let (Some(depression), Some(anxiety)) = (depression, anxiety) else {
        return incomplete(depression, anxiety);
    };

    let pair: BTreeSet<InstrumentId> = [depression.instrument, anxiety.instrument].into();

    if depression.tier.is_elevated() && anxiety.tier.is_elevated() {
        return ClinicalProfile {
            id: ProfileId::MixedAnxiousDepressive,
            rationale: format!(
                "{} and {} both reach the Mild threshold, indicating co-occurring \
                 depressive and anxious symptoms.",
                describe(depression),
                describe(anxiety)
            ),
            triggering_instruments: pair,
            recommended_focus:
                "Integrated treatment addressing both depressive and anxious symptoms".to_string(),
        };
    }

    let (d, a) = (depression.tier.rank(), anxiety.tier.rank());
    if d > a {
        return ClinicalProfile {
            id: ProfileId::DepressionDominant,
            rationale: format!(
                "{} exceeds {}; depressive symptoms predominate.",
                describe(depression),
                describe(anxiety)
            ),
            triggering_instruments: [depression.instrument].into(),
            recommended_focus: "Depression-focused intervention (behavioural activation, \
                                CBT for depression)"
                .to_string(),
        };
    }
    if a > d {
        return ClinicalProfile {
            id: ProfileId::AnxietyDominant,
            rationale: format!(
                "{} exceeds {}; anxious symptoms predominate.",
                describe(anxiety),
                describe(depression)
            ),
            triggering_instruments: [anxiety.instrument].into(),
            recommended_focus: "Anxiety-focused intervention (CBT for anxiety, worry \
                                management)"
                .to_string(),
        };
    }

    baseline(
        format!(
            "{} and {} are both below the Mild threshold.",
            describe(depression),
            describe(anxiety)
        ),
        pair,
    )
}

fn crisis(results: &[EvaluationResult], acute: BTreeSet<InstrumentId>) -> ClinicalProfile {
    let findings: Vec<String> = acute
        .iter()
        .filter_map(|id| {
            results
                .iter()
                .filter(|r| r.instrument == *id && r.acute_risk)
                .max_by(|x, y| x.raw_score.total_cmp(&y.raw_score))
        })
        .map(describe)
        .collect();

    ClinicalProfile {
        id: ProfileId::Crisis,
        rationale: format!(
            "Acute risk indicated by {}. Crisis status takes precedence over all other findings.",
            findings.join(", ")
        ),
        triggering_instruments: acute,
        recommended_focus: "Immediate safety assessment and crisis intervention".to_string(),
    }
}

fn incomplete(
    depression: Option<&EvaluationResult>,
    anxiety: Option<&EvaluationResult>,
) -> ClinicalProfile {
    let missing: Vec<&str> = [(depression, DEPRESSION), (anxiety, ANXIETY)]
        .into_iter()
        .filter(|(present, _)| present.is_none())
        .map(|(_, construct)| {
            InstrumentId::measuring(construct).map_or(construct.label(), InstrumentId::label)
        })
        .collect();
    let available: Vec<String> = [depression, anxiety]
        .into_iter()
        .flatten()
        .map(describe)
        .collect();

    debug!(missing = ?missing, "result set incomplete, mixed and dominance rules skipped");

    let mut rationale = format!(
        "Result set lacks {}; mixed and dominance rules were not evaluated.",
        missing.join(" and ")
    );
    if !available.is_empty() {
        rationale.push_str(&format!(" Available core result: {}.", available.join(", ")));
    }

    ClinicalProfile {
        id: ProfileId::Baseline,
        rationale,
        triggering_instruments: BTreeSet::new(),
        recommended_focus: format!(
            "Administer {} before triage; review available results clinically in the meantime",
            missing.join(" and ")
        ),
    }
}

fn baseline(rationale: String, triggering_instruments: BTreeSet<InstrumentId>) -> ClinicalProfile {
    ClinicalProfile {
        id: ProfileId::Baseline,
        rationale,
        triggering_instruments,
        recommended_focus: "Routine monitoring; no targeted intervention indicated".to_string(),
    }
}

/// The most severe result among instruments measuring `construct`. Ties on
/// tier go to the higher raw score, so the choice does not depend on input
/// order.
pub fn peak_of(results: &[EvaluationResult], construct: Construct) -> Option<&EvaluationResult> {
    most_severe(results.iter().filter(|r| r.instrument.construct() == construct))
}

fn most_severe<'a>(
    results: impl Iterator<Item = &'a EvaluationResult>,
) -> Option<&'a EvaluationResult> {
    results.max_by(|x, y| {
        x.tier
            .rank()
            .cmp(&y.tier.rank())
            .then(x.raw_score.total_cmp(&y.raw_score))
    })
}

/// e.g. "PHQ-9 Moderate (score 12)".
pub fn describe(result: &EvaluationResult) -> String {
    format!(
        "{} {} (score {})",
        result.instrument.label(),
        result.tier,
        result.raw_score
    )
}
