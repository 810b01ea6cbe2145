//! Analysis input and structured result.

use serde::{Deserialize, Serialize};

use super::{Language, RiskFinding, Trend};

/// One user submission: pasted report text plus the chosen language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub report_text: String,
    #[serde(default)]
    pub language: Language,
    /// Earlier report for the same person, used for trend comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_report_text: Option<String>,
}

impl AnalysisInput {
    pub fn new(report_text: impl Into<String>, language: Language) -> Self {
        Self {
            report_text: report_text.into(),
            language,
            previous_report_text: None,
        }
    }

    pub fn with_previous_report(mut self, previous: impl Into<String>) -> Self {
        self.previous_report_text = Some(previous.into());
        self
    }
}

/// Structured outcome of analyzing one report.
///
/// Field names on the wire follow the results view's contract
/// (`risk_highlights`, `trend_analysis`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub key_observations: Vec<String>,
    #[serde(rename = "risk_highlights")]
    pub risk_findings: Vec<RiskFinding>,
    pub simplified_explanation: String,
    pub doctor_summary: String,
    #[serde(rename = "trend_analysis")]
    pub trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{RiskLevel, SeverityColor};

    #[test]
    fn input_deserializes_without_optional_fields() {
        let input: AnalysisInput =
            serde_json::from_str(r#"{"report_text": "Cholesterol 250"}"#).unwrap();
        assert_eq!(input.language, Language::English);
        assert!(input.previous_report_text.is_none());
    }

    #[test]
    fn result_uses_results_view_field_names() {
        let result = AnalysisResult {
            key_observations: vec!["One".to_string()],
            risk_findings: vec![RiskFinding::new(
                "Cholesterol",
                RiskLevel::High,
                SeverityColor::Red,
            )],
            simplified_explanation: "Explain".to_string(),
            doctor_summary: "Summary".to_string(),
            trend: Trend::Stable,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["risk_highlights"][0]["parameter"], "Cholesterol");
        assert_eq!(json["trend_analysis"], "stable");
        assert_eq!(json["key_observations"][0], "One");
    }
}
