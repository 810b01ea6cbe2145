//! Keyword analyzer - the default, fully deterministic analyzer.

use async_trait::async_trait;

use crate::domain::report::{AnalysisInput, ReportClassifier};
use crate::ports::{AnalysisError, AnalysisOutcome, ReportAnalyzer};

/// Wraps [`ReportClassifier`]; never fails and never performs I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordReportAnalyzer;

impl KeywordReportAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportAnalyzer for KeywordReportAnalyzer {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisOutcome, AnalysisError> {
        Ok(AnalysisOutcome::new(ReportClassifier::classify(input), self.name()))
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
