use tera::{Context, Tera};

use psyscreen_triage::assess::Assessment;

use crate::error::ReportError;

/// Plain-text clinician summary used when no custom template is configured.
pub const DEFAULT_SUMMARY_TEMPLATE: &str = r#"Clinical profile: {{ profile.id }}
Recommended focus: {{ profile.recommended_focus }}

{{ profile.rationale }}

Results:
{% for r in results -%}
- {{ r.instrument }}: {{ r.raw_score }} ({{ r.tier }}){% if r.acute_risk %} ACUTE RISK{% endif %}
{% endfor -%}
{% if rejected | length > 0 %}
Data-quality warnings:
{% for w in rejected -%}
- {{ w.message }}
{% endfor -%}
{% endif -%}
"#;

/// Render a Tera template with an assessment.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The assessment fields become the template context variables.
pub fn render_summary(
    template_name: &str,
    template_content: &str,
    assessment: &Assessment,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(assessment)?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "rendered summary");
    Ok(rendered)
}

pub fn render_default_summary(assessment: &Assessment) -> Result<String, ReportError> {
    render_summary("summary", DEFAULT_SUMMARY_TEMPLATE, assessment)
}
