mod common;

use common::date;
use psyscreen_core::models::evaluation::{ScoreSubmission, SubmissionSet};
use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_core::models::profile::ProfileId;
use psyscreen_core::models::tier::SeverityTier;
use psyscreen_instruments::instruments::gad7::Gad7;
use psyscreen_instruments::instruments::phq9::Phq9;
use psyscreen_instruments::registry::Registry;
use psyscreen_instruments::Instrument;
use psyscreen_triage::assess::{assess, RejectionKind};
use uuid::Uuid;

fn submission(code: &str, raw_score: f64) -> ScoreSubmission {
    ScoreSubmission {
        instrument: code.to_string(),
        raw_score,
        date: date(),
    }
}

fn set(submissions: Vec<ScoreSubmission>) -> SubmissionSet {
    SubmissionSet {
        subject_id: Uuid::new_v4(),
        episode_id: Uuid::new_v4(),
        submissions,
    }
}

#[test]
fn full_battery_with_acute_ideation_is_crisis() {
    let input = set(vec![
        submission("aq10", 7.0),
        submission("atq30", 85.0),
        submission("gad7", 11.0),
        submission("pswq", 65.0),
        submission("rrs", 38.0),
        submission("bss", 10.0),
        submission("phq9", 6.0),
    ]);
    let assessment = assess(Registry::global(), &input);

    assert_eq!(assessment.subject_id, input.subject_id);
    assert_eq!(assessment.episode_id, input.episode_id);
    assert!(assessment.rejected.is_empty());
    assert_eq!(assessment.results.len(), 7);

    let tiers: Vec<(InstrumentId, SeverityTier)> = assessment
        .results
        .iter()
        .map(|r| (r.instrument, r.tier))
        .collect();
    assert_eq!(
        tiers,
        vec![
            (InstrumentId::Aq10, SeverityTier::Positive),
            (InstrumentId::Atq30, SeverityTier::Moderate),
            (InstrumentId::Gad7, SeverityTier::Moderate),
            (InstrumentId::Pswq, SeverityTier::High),
            (InstrumentId::Rrs, SeverityTier::High),
            (InstrumentId::Bss, SeverityTier::Severe),
            (InstrumentId::Phq9, SeverityTier::Mild),
        ]
    );
    assert_eq!(assessment.profile.id, ProfileId::Crisis);
}

#[test]
fn rejected_submissions_are_reported_and_excluded() {
    let input = set(vec![
        submission("gad7", 12.0),
        submission("phq9", 3.0),
        submission("bss", 52.0),
        submission("hads", 9.0),
    ]);
    let assessment = assess(Registry::global(), &input);

    assert_eq!(assessment.results.len(), 2);
    assert_eq!(assessment.rejected.len(), 2);
    assert_eq!(assessment.rejected[0].instrument, "bss");
    assert_eq!(assessment.rejected[0].kind, RejectionKind::ScoreOutOfDomain);
    assert_eq!(assessment.rejected[1].instrument, "hads");
    assert_eq!(assessment.rejected[1].kind, RejectionKind::UnknownInstrument);

    // the impossible BSS score must not escalate or block resolution
    assert_eq!(assessment.profile.id, ProfileId::AnxietyDominant);
}

#[test]
fn restricted_registry_rejects_unregistered_instruments() {
    let instruments: Vec<Box<dyn Instrument>> = vec![Box::new(Gad7), Box::new(Phq9)];
    let registry = Registry::from_instruments(instruments);
    let input = set(vec![
        submission("gad7", 6.0),
        submission("phq9", 6.0),
        submission("aq10", 8.0),
    ]);
    let assessment = assess(&registry, &input);

    assert_eq!(assessment.rejected.len(), 1);
    assert_eq!(assessment.rejected[0].kind, RejectionKind::UnknownInstrument);
    assert_eq!(assessment.profile.id, ProfileId::MixedAnxiousDepressive);
    assert!(!assessment.profile.rationale.contains("autism"));
}

#[test]
fn empty_submission_set_is_baseline() {
    let assessment = assess(Registry::global(), &set(Vec::new()));
    assert!(assessment.results.is_empty());
    assert_eq!(assessment.profile.id, ProfileId::Baseline);
    assert!(assessment.profile.triggering_instruments.is_empty());
}
