//! Checks over generated narrative text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::lab::LabParameter;
use crate::domain::report::AnalysisResult;

use super::input::round2;
use super::safety_language::{soften_phrasing, validate_language, LanguageAudit};
use super::GuardrailReport;

/// Appended to the explanation when generated numbers cannot be traced back.
pub const UNVERIFIED_CLAIMS_CAUTION: &str = "Some generated claims could not be verified against \
extracted lab values, so this summary should be reviewed carefully with a clinician.";

const HALLUCINATION_RATIO: f64 = 0.45;
const HALLUCINATION_MIN_NUMBERS: usize = 4;
const MAX_MISMATCH_PENALTY: f64 = 0.75;

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d*\.?\d+").expect("claim number pattern is valid"));

/// Result of checking numbers in generated text against extracted values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClaimValidation {
    pub hallucination_detected: bool,
    pub number_count: usize,
    pub unmatched_count: usize,
    pub mismatch_ratio: f64,
}

/// Overall trust in a generated narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLabel {
    High,
    Medium,
    Low,
}

/// Everything the guardrails found for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuardrailSummary {
    pub input: GuardrailReport,
    pub language: LanguageAudit,
    pub claims: Option<ClaimValidation>,
    pub confidence: ConfidenceLabel,
}

impl GuardrailSummary {
    /// Summary for an analysis that generated no free text.
    pub fn input_only(input: GuardrailReport) -> Self {
        let confidence = calculate_confidence(input.confidence, 0.0);
        Self {
            input,
            language: LanguageAudit::default(),
            claims: None,
            confidence,
        }
    }
}

/// Numbers in `text`, skipping anything that reads as a year.
fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| !(1900.0..=2200.0).contains(n))
        .collect()
}

fn allowed_values(params: &[LabParameter]) -> Vec<f64> {
    params
        .iter()
        .flat_map(|p| [Some(p.value), p.ref_min, p.ref_max])
        .flatten()
        .collect()
}

fn matches_allowed(value: f64, allowed: &[f64]) -> bool {
    allowed.iter().any(|candidate| {
        let tolerance = (candidate.abs() * 0.06).max(0.2);
        (value - candidate).abs() <= tolerance
    })
}

pub fn validate_claims(text: &str, params: &[LabParameter]) -> ClaimValidation {
    let found = extract_numbers(text);
    if found.is_empty() {
        return ClaimValidation {
            hallucination_detected: false,
            number_count: 0,
            unmatched_count: 0,
            mismatch_ratio: 0.0,
        };
    }

    let allowed = allowed_values(params);
    let unmatched = found.iter().filter(|v| !matches_allowed(**v, &allowed)).count();
    let ratio = round2(unmatched as f64 / found.len() as f64);

    ClaimValidation {
        hallucination_detected: ratio > HALLUCINATION_RATIO && found.len() >= HALLUCINATION_MIN_NUMBERS,
        number_count: found.len(),
        unmatched_count: unmatched,
        mismatch_ratio: ratio,
    }
}

pub fn calculate_confidence(input_confidence: f64, mismatch_ratio: f64) -> ConfidenceLabel {
    let base = input_confidence.clamp(0.0, 1.0);
    let score = base * (1.0 - mismatch_ratio.min(MAX_MISMATCH_PENALTY));
    if score >= 0.75 {
        ConfidenceLabel::High
    } else if score >= 0.45 {
        ConfidenceLabel::Medium
    } else {
        ConfidenceLabel::Low
    }
}

/// Rewrites the free-text fields of `result` in place and checks their numbers.
///
/// Observations are softened but do not get the educational notice; the
/// explanation and doctor summary already carry it.
pub fn run_output_guardrails(
    result: &mut AnalysisResult,
    params: &[LabParameter],
    input: GuardrailReport,
) -> GuardrailSummary {
    let (explanation, mut audit) = validate_language(&result.simplified_explanation);
    let (doctor_summary, summary_audit) = validate_language(&result.doctor_summary);
    result.simplified_explanation = explanation;
    result.doctor_summary = doctor_summary;
    audit = audit.merge(summary_audit);

    let mut observations = Vec::with_capacity(result.key_observations.len());
    for observation in &result.key_observations {
        let (softened, observation_audit) = soften_phrasing(observation);
        audit = audit.merge(observation_audit);
        if !softened.is_empty() {
            observations.push(softened);
        }
    }
    result.key_observations = observations;

    let claims = validate_claims(
        &format!(
            "{} {} {}",
            result.simplified_explanation,
            result.key_observations.join(" "),
            result.doctor_summary
        ),
        params,
    );

    if claims.hallucination_detected {
        result.simplified_explanation = format!(
            "{} {}",
            result.simplified_explanation.trim(),
            UNVERIFIED_CLAIMS_CAUTION
        );
    }

    let confidence = calculate_confidence(input.confidence, claims.mismatch_ratio);
    GuardrailSummary {
        input,
        language: audit,
        claims: Some(claims),
        confidence,
    }
}
