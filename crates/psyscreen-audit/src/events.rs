use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use psyscreen_core::models::profile::{ClinicalProfile, ProfileId};

/// A structured audit event for an engine outcome.
///
/// Events are logged via `tracing`; the subscriber installed by the host
/// application decides where they end up.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub actor: String,
    pub escalated: bool,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            actor: actor.into(),
            escalated: false,
            details: None,
        }
    }

    /// Event recorded whenever a profile is resolved for a subject.
    /// Crisis profiles are marked as escalated.
    pub fn profile_resolved(
        subject_id: Uuid,
        episode_id: Uuid,
        profile: &ClinicalProfile,
        actor: impl Into<String>,
    ) -> Self {
        let triggers: Vec<&str> = profile
            .triggering_instruments
            .iter()
            .map(|id| id.code())
            .collect();

        let mut event = Self::new("resolve_profile", "clinical_profile", subject_id.to_string(), actor)
            .with_details(serde_json::json!({
                "episode_id": episode_id,
                "profile": profile.id,
                "triggering_instruments": triggers,
            }));
        event.escalated = profile.id == ProfileId::Crisis;
        event
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing. Escalated events are logged at
    /// warn level so they survive a quieter filter.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();

        if self.escalated {
            warn!(
                audit.action = %self.action,
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.actor = %self.actor,
                audit.details = %details,
                "audit event (escalated)"
            );
        } else {
            info!(
                audit.action = %self.action,
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.actor = %self.actor,
                audit.details = %details,
                "audit event"
            );
        }
    }
}
