//! Data Transfer Objects for report analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::analysis::{SubmissionResults, SubmitReportResult};
use crate::domain::foundation::Timestamp;
use crate::domain::guardrails::GuardrailSummary;
use crate::domain::report::{
    AnalysisResult, HealthSummary, Language, Submission, SubmissionStatus, DISCLAIMER,
};

/// Where the client should go when there is nothing to show.
pub const ANALYZE_PATH: &str = "/analyze";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to submit a report for analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReportRequest {
    #[serde(default)]
    pub report: String,
    pub language: Option<String>,
    pub previous_report: Option<String>,
}

/// Request body for the legacy simplify endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SimplifyReportRequest {
    pub report: Option<String>,
    pub language: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Results view of a completed submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub submission_id: String,
    pub status: SubmissionStatus,
    pub language: Language,
    pub result: AnalysisResult,
    pub summary_text: String,
    pub disclaimer: &'static str,
    pub submitted_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardrails: Option<GuardrailSummary>,
}

impl SubmissionResponse {
    fn from_parts(submission: &Submission, result: &AnalysisResult, summary: HealthSummary) -> Self {
        Self {
            submission_id: submission.id().to_string(),
            status: submission.status(),
            language: submission.input().language,
            result: result.clone(),
            summary_text: summary.text,
            disclaimer: DISCLAIMER,
            submitted_at: *submission.submitted_at(),
            completed_at: submission.completed_at().copied(),
            analyzer: None,
            guardrails: None,
        }
    }
}

impl From<SubmissionResults> for SubmissionResponse {
    fn from(results: SubmissionResults) -> Self {
        Self::from_parts(&results.submission, &results.result, results.summary)
    }
}

impl TryFrom<SubmitReportResult> for SubmissionResponse {
    type Error = crate::domain::report::ReportError;

    fn try_from(submitted: SubmitReportResult) -> Result<Self, Self::Error> {
        let result = submitted.submission.result()?;
        let summary = HealthSummary::from_result(result);
        let mut response = Self::from_parts(&submitted.submission, result, summary);
        response.analyzer = Some(submitted.analyzer);
        response.guardrails = submitted.guardrails;
        Ok(response)
    }
}

/// Envelope of the simplify endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SimplifyReportResponse {
    pub status: &'static str,
    pub data: SimplifiedReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimplifiedReport {
    pub simplified_explanation: String,
}

impl SimplifyReportResponse {
    pub fn success(simplified_explanation: String) -> Self {
        Self {
            status: "success",
            data: SimplifiedReport {
                simplified_explanation,
            },
        }
    }
}

/// Error envelope of the simplify endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SimplifyErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl SimplifyErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageResponse {
    pub name: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageResponse>,
}

impl LanguagesResponse {
    pub fn supported() -> Self {
        Self {
            languages: Language::ALL
                .iter()
                .map(|lang| LanguageResponse {
                    name: lang.name(),
                    code: lang.code(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Points the client back at the input screen.
    pub fn with_redirect(self) -> Self {
        self.with_details(serde_json::json!({ "redirect_to": ANALYZE_PATH }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{AnalysisInput, ReportClassifier};

    #[test]
    fn submit_request_defaults_missing_fields() {
        let req: SubmitReportRequest = serde_json::from_str("{}").unwrap();
        assert!(req.report.is_empty());
        assert!(req.language.is_none());
        assert!(req.previous_report.is_none());
    }

    #[test]
    fn submit_response_uses_wire_names() {
        let mut submission = Submission::start(AnalysisInput::new(
            "Cholesterol: 250, Hemoglobin: 11.2",
            Language::English,
        ));
        let result = ReportClassifier::classify(submission.input());
        submission.complete(result).unwrap();

        let response = SubmissionResponse::try_from(SubmitReportResult {
            submission,
            analyzer: "keyword".to_string(),
            guardrails: None,
        })
        .unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "complete");
        assert_eq!(json["analyzer"], "keyword");
        assert_eq!(json["result"]["trend_analysis"], "stable");
        assert_eq!(json["result"]["risk_highlights"][0]["color"], "red");
        assert_eq!(json["disclaimer"], DISCLAIMER);
        assert!(json.get("guardrails").is_none());
    }

    #[test]
    fn languages_lists_all_five() {
        let json = serde_json::to_value(LanguagesResponse::supported()).unwrap();
        let languages = json["languages"].as_array().unwrap();
        assert_eq!(languages.len(), 5);
        assert_eq!(languages[1]["name"], "Hindi");
        assert_eq!(languages[1]["code"], "hi");
    }

    #[test]
    fn simplify_envelopes_serialize() {
        let ok = serde_json::to_value(SimplifyReportResponse::success("plain".into())).unwrap();
        assert_eq!(ok["status"], "success");
        assert_eq!(ok["data"]["simplified_explanation"], "plain");

        let err = serde_json::to_value(SimplifyErrorResponse::new("report field is required.")).unwrap();
        assert_eq!(err["status"], "error");
        assert_eq!(err["message"], "report field is required.");
    }

    #[test]
    fn error_response_redirect_sets_details() {
        let error = ErrorResponse::not_found("Submission", "abc-123").with_redirect();
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("abc-123"));
        assert_eq!(error.details.unwrap()["redirect_to"], ANALYZE_PATH);
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::bad_request("Invalid input")).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("details").is_none());
    }
}
