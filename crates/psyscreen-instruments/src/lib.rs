//! psyscreen-instruments
//!
//! Threshold tables and scoring rules for each supported instrument.
//! Pure data and pure functions: classification, acute-risk evaluation and
//! normalization of raw scores into canonical evaluation results.

pub mod error;
pub mod instruments;
pub mod normalize;
pub mod registry;
pub mod risk;
pub mod scoring;

use psyscreen_core::models::evaluation::EvaluationResult;
use psyscreen_core::models::instrument::InstrumentId;

use error::InstrumentError;
use risk::RiskRule;
use scoring::{Classification, ScoreRange, SeverityRange};

/// Trait implemented by each clinical assessment instrument.
pub trait Instrument: Send + Sync {
    fn id(&self) -> InstrumentId;

    /// Full instrument name (e.g., "GAD-7: Generalized Anxiety Disorder scale").
    fn name(&self) -> &str;

    /// Nominal raw-score domain.
    fn domain(&self) -> ScoreRange;

    /// Whether out-of-domain scores are pulled onto the nearest bound.
    /// Instruments that return `false` reject them instead.
    fn clamps(&self) -> bool {
        true
    }

    /// Ordered threshold table, ascending by upper bound.
    fn ranges(&self) -> &[SeverityRange];

    fn risk_rule(&self) -> Option<RiskRule> {
        None
    }

    /// Map a raw score to a severity tier.
    fn classify(&self, score: f64) -> Result<Classification, InstrumentError> {
        let domain = self.domain();
        let out_of_domain = || InstrumentError::ScoreOutOfDomain {
            instrument: self.id(),
            score,
            min: domain.min,
            max: domain.max,
        };

        if !score.is_finite() {
            return Err(out_of_domain());
        }

        let (effective_score, clamped_from) = if domain.contains(score) {
            (score, None)
        } else if self.clamps() {
            (domain.clamp(score), Some(score))
        } else {
            return Err(out_of_domain());
        };

        let (range, ceiling) = scoring::lookup(self.ranges(), effective_score)
            .ok_or_else(|| InstrumentError::UnknownInstrument(self.id().to_string()))?;

        Ok(Classification {
            tier: range.tier,
            description: range.description.clone(),
            effective_score,
            clamped_from,
            ceiling,
        })
    }

    /// Format a result as structured text for inclusion in a report prompt.
    fn to_structured_input(&self, result: &EvaluationResult) -> String {
        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!("- Administered: {}\n", result.date));
        output.push_str(&format!(
            "- Raw score: {} (domain {}–{})\n",
            result.raw_score,
            self.domain().min,
            self.domain().max
        ));
        output.push_str(&format!("- Tier: {}\n", result.tier));
        if self.risk_rule().is_some() {
            let flag = if result.acute_risk { "yes" } else { "no" };
            output.push_str(&format!("- Acute risk: {flag}\n"));
        }
        output.push_str(&format!("- Note: {}\n", result.note));
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::pswq::Pswq),
        Box::new(instruments::rrs::Rrs),
        Box::new(instruments::atq30::Atq30),
        Box::new(instruments::bss::Bss),
        Box::new(instruments::aq10::Aq10),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: InstrumentId) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
