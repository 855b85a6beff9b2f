use psyscreen_core::models::evaluation::ScoreSubmission;
use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_core::models::tier::SeverityTier;
use psyscreen_instruments::error::InstrumentError;
use psyscreen_instruments::instruments::gad7::Gad7;
use psyscreen_instruments::instruments::phq9::Phq9;
use psyscreen_instruments::normalize::{normalize, normalize_score};
use psyscreen_instruments::registry::Registry;
use psyscreen_instruments::Instrument;

fn date() -> jiff::Timestamp {
    "2026-03-01T10:00:00Z".parse().unwrap()
}

fn submission(code: &str, raw_score: f64) -> ScoreSubmission {
    ScoreSubmission {
        instrument: code.to_string(),
        raw_score,
        date: date(),
    }
}

#[test]
fn suicidal_ideation_10_is_severe_with_acute_risk() {
    let result = normalize(Registry::global(), &submission("bss", 10.0)).unwrap();
    assert_eq!(result.instrument, InstrumentId::Bss);
    assert_eq!(result.tier, SeverityTier::Severe);
    assert!(result.acute_risk);
    assert_eq!(result.raw_score, 10.0);
    assert_eq!(result.date, date());
}

#[test]
fn acute_risk_is_raised_inside_the_moderate_tier() {
    let result = normalize(Registry::global(), &submission("bss", 6.0)).unwrap();
    assert_eq!(result.tier, SeverityTier::Moderate);
    assert!(result.acute_risk);

    let result = normalize(Registry::global(), &submission("bss", 5.0)).unwrap();
    assert_eq!(result.tier, SeverityTier::Mild);
    assert!(!result.acute_risk);
}

#[test]
fn instruments_without_a_risk_rule_never_flag() {
    let result = normalize(Registry::global(), &submission("phq9", 27.0)).unwrap();
    assert_eq!(result.tier, SeverityTier::Severe);
    assert!(!result.acute_risk);
}

#[test]
fn codes_are_case_insensitive() {
    let result = normalize(Registry::global(), &submission(" GAD7 ", 11.0)).unwrap();
    assert_eq!(result.instrument, InstrumentId::Gad7);
    assert_eq!(result.tier, SeverityTier::Moderate);
}

#[test]
fn unparsable_code_is_unknown_instrument() {
    let err = normalize(Registry::global(), &submission("beck-anxiety", 12.0)).unwrap_err();
    assert_eq!(err, InstrumentError::UnknownInstrument("beck-anxiety".to_string()));
}

#[test]
fn unregistered_instrument_is_unknown_instrument() {
    let instruments: Vec<Box<dyn Instrument>> = vec![Box::new(Gad7), Box::new(Phq9)];
    let registry = Registry::from_instruments(instruments);
    assert_eq!(registry.len(), 2);

    let err = normalize_score(&registry, InstrumentId::Bss, 4.0, date()).unwrap_err();
    assert_eq!(err, InstrumentError::UnknownInstrument("bss".to_string()));

    assert!(normalize_score(&registry, InstrumentId::Gad7, 4.0, date()).is_ok());
}

#[test]
fn duplicate_registrations_keep_the_first() {
    let instruments: Vec<Box<dyn Instrument>> = vec![Box::new(Gad7), Box::new(Gad7)];
    let registry = Registry::from_instruments(instruments);
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(InstrumentId::Gad7));
    assert!(!registry.contains(InstrumentId::Phq9));
}

#[test]
fn standard_registry_covers_every_instrument() {
    let registry = Registry::global();
    assert_eq!(registry.len(), InstrumentId::ALL.len());
    for id in InstrumentId::ALL {
        assert!(registry.contains(id), "{id} missing");
    }
}

#[test]
fn out_of_domain_risk_score_is_reported_not_classified() {
    let err = normalize(Registry::global(), &submission("bss", 45.0)).unwrap_err();
    assert!(matches!(err, InstrumentError::ScoreOutOfDomain { score, .. } if score == 45.0));
}

#[test]
fn clamped_scores_keep_the_raw_value_and_say_so() {
    let result = normalize(Registry::global(), &submission("pswq", 90.0)).unwrap();
    assert_eq!(result.raw_score, 90.0);
    assert_eq!(result.tier, SeverityTier::High);
    assert!(result.note.contains("clamped to 80"));
}
