//! Keyword report classifier.
//!
//! Deterministic stand-in for a real inference service: a case-insensitive
//! scan for two marker names plus canned text. Same input, same output.

use super::{AnalysisInput, AnalysisResult, Language, RiskFinding, RiskLevel, SeverityColor, Trend};

/// Explanation shown for every language other than Hindi.
pub const EXPLANATION_ENGLISH: &str =
    "Some parameters are outside optimal range. Consider lifestyle improvements and consult a doctor.";

/// Explanation shown when Hindi is selected.
pub const EXPLANATION_HINDI: &str = "कुछ मान सामान्य सीमा से बाहर हैं। कृपया डॉक्टर से सलाह लें।";

/// Clinician-facing summary, independent of input.
pub const DOCTOR_SUMMARY: &str = "Discuss lipid profile and dietary habits with healthcare provider.";

/// Observations listed for every report, whatever the scan found.
pub const KEY_OBSERVATIONS: [&str; 2] = ["Elevated cholesterol detected.", "Mild hemoglobin variation."];

/// Recognized tokens in detection order.
const MARKERS: [(&str, &str, RiskLevel, SeverityColor); 2] = [
    ("cholesterol", "Cholesterol", RiskLevel::High, SeverityColor::Red),
    ("hemoglobin", "Hemoglobin", RiskLevel::Borderline, SeverityColor::Yellow),
];

/// Maps `(report text, language)` to an [`AnalysisResult`].
pub struct ReportClassifier;

impl ReportClassifier {
    /// Classifies a report. Total over its input; never fails or performs I/O.
    pub fn classify(input: &AnalysisInput) -> AnalysisResult {
        let lowered = input.report_text.to_lowercase();

        let risk_findings = MARKERS
            .iter()
            .filter(|(token, ..)| lowered.contains(token))
            .map(|(_, parameter, level, color)| RiskFinding::new(*parameter, *level, *color))
            .collect();

        AnalysisResult {
            key_observations: KEY_OBSERVATIONS.iter().map(|s| s.to_string()).collect(),
            risk_findings,
            simplified_explanation: Self::explanation_for(input.language).to_string(),
            doctor_summary: DOCTOR_SUMMARY.to_string(),
            trend: Trend::Stable,
        }
    }

    /// Only Hindi has its own text; the other languages get English.
    pub fn explanation_for(language: Language) -> &'static str {
        match language {
            Language::Hindi => EXPLANATION_HINDI,
            _ => EXPLANATION_ENGLISH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str, language: Language) -> AnalysisResult {
        ReportClassifier::classify(&AnalysisInput::new(text, language))
    }

    #[test]
    fn flags_both_markers_in_detection_order() {
        let result = classify("Cholesterol: 250, Hemoglobin: 11.2", Language::English);

        assert_eq!(
            result.risk_findings,
            vec![
                RiskFinding::new("Cholesterol", RiskLevel::High, SeverityColor::Red),
                RiskFinding::new("Hemoglobin", RiskLevel::Borderline, SeverityColor::Yellow),
            ]
        );
        assert_eq!(result.simplified_explanation, EXPLANATION_ENGLISH);
        assert_eq!(result.trend, Trend::Stable);
    }

    #[test]
    fn order_is_fixed_regardless_of_text_order() {
        let result = classify("hemoglobin low, then CHOLESTEROL high", Language::English);
        let names: Vec<_> = result.risk_findings.iter().map(|f| f.parameter.as_str()).collect();
        assert_eq!(names, vec!["Cholesterol", "Hemoglobin"]);
    }

    #[test]
    fn matches_case_insensitively_and_inside_words() {
        let result = classify("HDL-CHOLESTEROLEMIA panel", Language::English);
        assert_eq!(result.risk_findings.len(), 1);
        assert_eq!(result.risk_findings[0].parameter, "Cholesterol");
    }

    #[test]
    fn unmatched_and_empty_text_produce_no_findings() {
        assert!(classify("Glucose 95 mg/dL", Language::English).risk_findings.is_empty());
        assert!(classify("", Language::Tamil).risk_findings.is_empty());
    }

    #[test]
    fn hindi_gets_hindi_text_every_other_language_gets_english() {
        assert_eq!(classify("", Language::Hindi).simplified_explanation, EXPLANATION_HINDI);
        for language in [Language::English, Language::Tamil, Language::Kannada, Language::Malayalam] {
            assert_eq!(classify("", language).simplified_explanation, EXPLANATION_ENGLISH);
        }
    }

    #[test]
    fn observations_and_summary_are_fixed() {
        let result = classify("nothing relevant", Language::Kannada);
        assert_eq!(
            result.key_observations,
            vec!["Elevated cholesterol detected.", "Mild hemoglobin variation."]
        );
        assert_eq!(result.doctor_summary, DOCTOR_SUMMARY);
    }

    #[test]
    fn classification_is_deterministic() {
        let input = AnalysisInput::new("Cholesterol 240 hemoglobin 13", Language::Malayalam);
        assert_eq!(ReportClassifier::classify(&input), ReportClassifier::classify(&input));
    }
}
