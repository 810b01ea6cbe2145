//! Checks over extracted parameters, run before any narrative is generated.

use serde::Serialize;

use crate::domain::lab::LabParameter;

/// Fewer extracted parameters than this is an incomplete report.
pub const MIN_PARAMETERS: usize = 3;

const MIN_FIELD_RATIO: f64 = 0.3;
const MIN_EXTRACTION_CONFIDENCE: f64 = 0.65;

/// Outcome of one input check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuardrailCheck {
    pub name: &'static str,
    pub safe: bool,
    pub reason: String,
    pub confidence: f64,
}

/// Combined outcome of all input checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuardrailReport {
    pub safe: bool,
    pub reason: String,
    pub confidence: f64,
    pub checks: Vec<GuardrailCheck>,
}

pub fn run_input_guardrails(params: &[LabParameter]) -> GuardrailReport {
    let checks = vec![check_data_completeness(params), check_extraction_confidence(params)];

    let safe = checks.iter().all(|c| c.safe);
    let reason = checks
        .iter()
        .filter(|c| !c.reason.is_empty())
        .map(|c| c.reason.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    let confidence = round2(checks.iter().map(|c| c.confidence).sum::<f64>() / checks.len() as f64);

    GuardrailReport {
        safe,
        reason,
        confidence,
        checks,
    }
}

/// Enough parameters, and enough of them with units and reference ranges.
pub fn check_data_completeness(params: &[LabParameter]) -> GuardrailCheck {
    let count = params.len();
    let (unit_ratio, ref_ratio) = if count == 0 {
        (0.0, 0.0)
    } else {
        let units = params.iter().filter(|p| p.has_unit()).count();
        let refs = params.iter().filter(|p| p.has_reference_range()).count();
        (units as f64 / count as f64, refs as f64 / count as f64)
    };

    let safe = count >= MIN_PARAMETERS && unit_ratio >= MIN_FIELD_RATIO && ref_ratio >= MIN_FIELD_RATIO;
    let confidence = if count == 0 {
        0.0
    } else {
        round2(((unit_ratio + ref_ratio) / 2.0).min(1.0))
    };

    GuardrailCheck {
        name: "data_completeness",
        safe,
        reason: if safe {
            String::new()
        } else {
            "Report data is incomplete. Add clearer values, units, and reference ranges.".to_string()
        },
        confidence,
    }
}

/// How much of each row was recovered: value weighs 0.7, name 0.3.
pub fn check_extraction_confidence(params: &[LabParameter]) -> GuardrailCheck {
    if params.is_empty() {
        return GuardrailCheck {
            name: "extraction_confidence",
            safe: false,
            reason: "Extraction confidence is too low to proceed.".to_string(),
            confidence: 0.0,
        };
    }

    let count = params.len() as f64;
    let numeric = params.iter().filter(|p| p.value.is_finite()).count() as f64 / count;
    let named = params.iter().filter(|p| !p.name.trim().is_empty()).count() as f64 / count;
    let confidence = round2(numeric * 0.7 + named * 0.3);
    let safe = confidence >= MIN_EXTRACTION_CONFIDENCE;

    GuardrailCheck {
        name: "extraction_confidence",
        safe,
        reason: if safe {
            String::new()
        } else {
            "Extraction confidence is below threshold. Please paste clearer report text.".to_string()
        },
        confidence,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
