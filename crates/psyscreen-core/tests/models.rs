use psyscreen_core::error::CoreError;
use psyscreen_core::models::evaluation::SubmissionSet;
use psyscreen_core::models::instrument::{Construct, InstrumentId};
use psyscreen_core::models::profile::ProfileId;
use psyscreen_core::models::tier::SeverityTier;

#[test]
fn wire_codes_match_serde_representation() {
    for id in InstrumentId::ALL {
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.code()));
        assert_eq!(id.code().parse::<InstrumentId>().unwrap(), id);
    }
}

#[test]
fn unknown_code_is_rejected() {
    match "madrs".parse::<InstrumentId>() {
        Err(CoreError::UnknownInstrument(code)) => assert_eq!(code, "madrs"),
        other => panic!("expected UnknownInstrument, got {other:?}"),
    }
}

#[test]
fn only_one_instrument_measures_each_core_construct() {
    let count = |c: Construct| InstrumentId::ALL.iter().filter(|i| i.construct() == c).count();
    assert_eq!(count(Construct::Anxiety), 1);
    assert_eq!(count(Construct::Depression), 1);
    assert_eq!(count(Construct::SuicidalIdeation), 1);
}

#[test]
fn core_constructs_map_to_phq9_and_gad7() {
    assert_eq!(InstrumentId::measuring(Construct::Depression), Some(InstrumentId::Phq9));
    assert_eq!(InstrumentId::measuring(Construct::Anxiety), Some(InstrumentId::Gad7));
    for id in InstrumentId::ALL {
        assert_eq!(InstrumentId::measuring(id.construct()), Some(id));
    }
}

#[test]
fn graded_tiers_rank_in_order() {
    let graded = [
        SeverityTier::Minimal,
        SeverityTier::Mild,
        SeverityTier::Moderate,
        SeverityTier::ModeratelySevere,
        SeverityTier::Severe,
    ];
    assert!(graded.windows(2).all(|w| w[0].rank() < w[1].rank()));
    assert!(!SeverityTier::Minimal.is_elevated());
    assert!(SeverityTier::Mild.is_elevated());
}

#[test]
fn trait_and_binary_tiers_share_the_scale() {
    assert!(SeverityTier::Low.rank() < SeverityTier::Moderate.rank());
    assert!(SeverityTier::Moderate.rank() < SeverityTier::High.rank());
    assert!(SeverityTier::Negative.rank() < SeverityTier::Positive.rank());
    assert_eq!(SeverityTier::Positive.rank(), SeverityTier::Moderate.rank());
    assert_eq!(SeverityTier::High.rank(), SeverityTier::ModeratelySevere.rank());
}

#[test]
fn profile_priority_follows_precedence() {
    let order = [
        ProfileId::Crisis,
        ProfileId::MixedAnxiousDepressive,
        ProfileId::DepressionDominant,
        ProfileId::AnxietyDominant,
        ProfileId::Baseline,
    ];
    assert!(order.windows(2).all(|w| w[0].priority() < w[1].priority()));
}

#[test]
fn submission_set_parses_from_json() {
    let json = r#"{
        "subject_id": "6f1c2a8e-3b0d-4c55-9a57-2f5e8b1d7c01",
        "episode_id": "0b7c7b1e-8d4f-4f0c-a1a9-5d2b1e3c4f60",
        "submissions": [
            { "instrument": "gad7", "raw_score": 11, "date": "2026-03-01T10:00:00Z" },
            { "instrument": "bss", "raw_score": 10.0, "date": "2026-03-01T10:05:00Z" }
        ]
    }"#;
    let set = SubmissionSet::from_json(json).unwrap();
    assert_eq!(set.submissions.len(), 2);
    assert_eq!(set.submissions[0].instrument, "gad7");
    assert_eq!(set.submissions[0].raw_score, 11.0);
}

#[test]
fn malformed_json_is_a_serialization_error() {
    assert!(matches!(
        SubmissionSet::from_json("{ not json"),
        Err(CoreError::Serialization(_))
    ));
}

#[test]
fn profile_codes_match_serde_representation() {
    for id in [
        ProfileId::Crisis,
        ProfileId::MixedAnxiousDepressive,
        ProfileId::DepressionDominant,
        ProfileId::AnxietyDominant,
        ProfileId::Baseline,
    ] {
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{}\"", id.code()));
    }
}
