use std::collections::BTreeSet;

use psyscreen_audit::events::AuditEvent;
use psyscreen_core::models::instrument::InstrumentId;
use psyscreen_core::models::profile::{ClinicalProfile, ProfileId};
use uuid::Uuid;

fn profile(id: ProfileId, triggers: &[InstrumentId]) -> ClinicalProfile {
    ClinicalProfile {
        id,
        rationale: String::new(),
        triggering_instruments: triggers.iter().copied().collect::<BTreeSet<_>>(),
        recommended_focus: String::new(),
    }
}

#[test]
fn crisis_resolution_is_escalated() {
    let subject = Uuid::new_v4();
    let event = AuditEvent::profile_resolved(
        subject,
        Uuid::new_v4(),
        &profile(ProfileId::Crisis, &[InstrumentId::Bss]),
        "cli",
    );

    assert!(event.escalated);
    assert_eq!(event.action, "resolve_profile");
    assert_eq!(event.resource_type, "clinical_profile");
    assert_eq!(event.resource_id, subject.to_string());

    let details = event.details.unwrap();
    assert_eq!(details["profile"], "crisis");
    assert_eq!(details["triggering_instruments"][0], "bss");
}

#[test]
fn routine_resolution_is_not_escalated() {
    let event = AuditEvent::profile_resolved(
        Uuid::new_v4(),
        Uuid::new_v4(),
        &profile(ProfileId::Baseline, &[]),
        "cli",
    );
    assert!(!event.escalated);
    assert_eq!(event.details.unwrap()["triggering_instruments"], serde_json::json!([]));
}

#[test]
fn generic_events_carry_optional_details() {
    let event = AuditEvent::new("export_report", "assessment", "abc", "clinician-1");
    assert!(event.details.is_none());
    let event = event.with_details(serde_json::json!({ "format": "summary" }));
    assert_eq!(event.details.unwrap()["format"], "summary");
}
