//! Guardrails around report analysis.
//!
//! Input checks judge whether the extracted parameters are good enough to
//! analyze; output checks keep generated text non-diagnostic and tie its
//! numbers back to the extracted values.

mod input;
mod output;
mod safety_language;

pub use input::{
    check_data_completeness, check_extraction_confidence, run_input_guardrails, GuardrailCheck,
    GuardrailReport, MIN_PARAMETERS,
};
pub use output::{
    calculate_confidence, run_output_guardrails, validate_claims, ClaimValidation,
    ConfidenceLabel, GuardrailSummary, UNVERIFIED_CLAIMS_CAUTION,
};
pub use safety_language::{validate_language, LanguageAudit, EDUCATIONAL_NOTICE};
