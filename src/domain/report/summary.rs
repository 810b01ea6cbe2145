//! Plain-text health summary shared by copy and download.

use serde::Serialize;

use super::AnalysisResult;

/// Shown verbatim alongside every result.
pub const DISCLAIMER: &str =
    "This tool does not provide medical diagnosis. Please consult a licensed healthcare professional.";

/// Download file name for the exported summary.
pub const SUMMARY_FILENAME: &str = "health-summary.txt";

/// MIME type of the exported summary.
pub const SUMMARY_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Unstructured export of a result: explanation, blank line, doctor summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthSummary {
    pub text: String,
    pub filename: &'static str,
    pub content_type: &'static str,
}

impl HealthSummary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            text: format!("{}\n\n{}", result.simplified_explanation, result.doctor_summary),
            filename: SUMMARY_FILENAME,
            content_type: SUMMARY_CONTENT_TYPE,
        }
    }

    /// Value for a `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{AnalysisInput, Language, ReportClassifier};

    #[test]
    fn summary_joins_explanation_and_doctor_summary_with_blank_line() {
        let result = ReportClassifier::classify(&AnalysisInput::new("", Language::English));
        let summary = HealthSummary::from_result(&result);

        assert_eq!(
            summary.text,
            "Some parameters are outside optimal range. Consider lifestyle improvements and consult a doctor.\n\nDiscuss lipid profile and dietary habits with healthcare provider."
        );
        assert_eq!(summary.filename, "health-summary.txt");
    }

    #[test]
    fn content_disposition_names_the_file() {
        let result = ReportClassifier::classify(&AnalysisInput::new("", Language::Hindi));
        let summary = HealthSummary::from_result(&result);
        assert_eq!(
            summary.content_disposition(),
            "attachment; filename=\"health-summary.txt\""
        );
        assert!(summary.into_bytes().starts_with("कुछ".as_bytes()));
    }
}
