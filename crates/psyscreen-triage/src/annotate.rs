//! Differential annotation.
//!
//! Secondary instruments never change the resolved profile. When they point
//! at an alternate or comorbid explanation, a note is appended to the
//! rationale instead.

use psyscreen_core::models::evaluation::EvaluationResult;
use psyscreen_core::models::instrument::Construct;
use psyscreen_core::models::profile::{ClinicalProfile, ProfileId};
use psyscreen_core::models::tier::SeverityTier;

use crate::resolve::{ANXIETY, DEPRESSION, describe, peak_of};

const NOTE_PREFIX: &str = "Differential note: ";

/// Return a copy of `profile` with any differential notes appended to its
/// rationale. `id` and `triggering_instruments` are carried over untouched.
pub fn annotate(profile: &ClinicalProfile, results: &[EvaluationResult]) -> ClinicalProfile {
    let mut annotated = profile.clone();
    for note in differential_notes(profile, results) {
        annotated.rationale.push('\n');
        annotated.rationale.push_str(NOTE_PREFIX);
        annotated.rationale.push_str(&note);
    }
    annotated
}

/// Notes in a fixed rule order: autism screen, trait worry, cognitive
/// vulnerability, sub-threshold ideation.
pub fn differential_notes(profile: &ClinicalProfile, results: &[EvaluationResult]) -> Vec<String> {
    let mut notes = Vec::new();

    let mood_elevated = [DEPRESSION, ANXIETY]
        .into_iter()
        .filter_map(|construct| peak_of(results, construct))
        .any(|r| r.tier.is_elevated());

    if let Some(screen) = peak_of(results, Construct::AutismScreen)
        && screen.tier == SeverityTier::Positive
        && mood_elevated
    {
        notes.push(format!(
            "positive {} co-occurs with elevated mood or anxiety symptoms; recommend \
             differential work-up for an autism spectrum presentation before attributing \
             symptoms to a primary mood or anxiety disorder.",
            describe(screen)
        ));
    }

    let anxiety_addressed = matches!(
        profile.id,
        ProfileId::Crisis | ProfileId::AnxietyDominant | ProfileId::MixedAnxiousDepressive
    );
    if let Some(worry) = peak_of(results, Construct::WorryTrait)
        && worry.tier == SeverityTier::High
        && !anxiety_addressed
    {
        notes.push(format!(
            "{} indicates elevated trait worry not reflected in the resolved profile; \
             consider assessment for generalized anxiety.",
            describe(worry)
        ));
    }

    if profile.id != ProfileId::Crisis {
        let cognitive: Vec<String> = [
            peak_of(results, Construct::RuminationTrait).filter(|r| r.tier == SeverityTier::High),
            peak_of(results, Construct::NegativeThoughts)
                .filter(|r| r.tier.rank() >= SeverityTier::Moderate.rank()),
        ]
        .into_iter()
        .flatten()
        .map(describe)
        .collect();

        if !cognitive.is_empty() {
            notes.push(format!(
                "cognitive vulnerability ({}); rumination and negative automatic thoughts may \
                 maintain symptoms and are a target for cognitive work.",
                cognitive.join(", ")
            ));
        }

        if let Some(ideation) = peak_of(results, Construct::SuicidalIdeation)
            && ideation.tier.is_elevated()
            && !ideation.acute_risk
        {
            notes.push(format!(
                "{} indicates ideation below the acute threshold; continue suicide-risk \
                 monitoring at every contact.",
                describe(ideation)
            ));
        }
    }

    notes
}
