//! Assessment context builder for the narrative-report model.
//!
//! Assembles the resolved profile and every evaluation result into a
//! structured block that is prepended to the report-generation prompt. The
//! model writes prose from this block; it never re-derives the profile.

use psyscreen_instruments::registry::Registry;
use psyscreen_triage::assess::Assessment;

/// Build an XML-style context block for one assessment.
///
/// The profile is always present. Results and rejected submissions are
/// listed in the order they were submitted.
pub fn build_assessment_block(assessment: &Assessment) -> String {
    let profile = &assessment.profile;
    let triggers: Vec<&str> = profile
        .triggering_instruments
        .iter()
        .map(|id| id.code())
        .collect();

    let mut block = String::from("<assessment_context>\n");
    block.push_str(&format!(
        "<profile id=\"{}\" priority=\"{}\" triggers=\"{}\">\n",
        profile.id.code(),
        profile.id.priority(),
        triggers.join(",")
    ));
    block.push_str(&format!("<rationale>{}</rationale>\n", profile.rationale));
    block.push_str(&format!("<focus>{}</focus>\n", profile.recommended_focus));
    block.push_str("</profile>\n");

    for result in &assessment.results {
        block.push_str(&format!(
            "<result instrument=\"{}\" date=\"{}\" score=\"{}\" tier=\"{}\" acute_risk=\"{}\">{}</result>\n",
            result.instrument.code(),
            result.date,
            result.raw_score,
            result.tier,
            result.acute_risk,
            result.note
        ));
    }

    for rejected in &assessment.rejected {
        block.push_str(&format!(
            "<rejected instrument=\"{}\" score=\"{}\">{}</rejected>\n",
            escape(&rejected.instrument),
            rejected.raw_score,
            escape(&rejected.message)
        ));
    }

    block.push_str("</assessment_context>");
    block
}

/// Escape caller-supplied text for an attribute or element body.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Per-instrument markdown sections, one per result, using each
/// instrument's own formatting. Results for instruments missing from
/// `registry` are skipped.
pub fn build_instrument_sections(registry: &Registry, assessment: &Assessment) -> String {
    assessment
        .results
        .iter()
        .filter_map(|result| {
            registry
                .get(result.instrument)
                .map(|instrument| instrument.to_structured_input(result))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
