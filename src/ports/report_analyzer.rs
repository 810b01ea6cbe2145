//! ReportAnalyzer port - turns a pasted report into an analysis result.
//!
//! Every analyzer (keyword, lab, LLM) implements this one contract so the
//! application layer never knows which one is configured.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::guardrails::GuardrailSummary;
use crate::domain::report::{AnalysisInput, AnalysisResult};

use super::AIError;

/// What an analyzer produced, and how.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    /// Name of the analyzer that produced `result`.
    pub analyzer: String,
    /// Present when the analyzer ran guardrails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardrails: Option<GuardrailSummary>,
}

impl AnalysisOutcome {
    pub fn new(result: AnalysisResult, analyzer: impl Into<String>) -> Self {
        Self {
            result,
            analyzer: analyzer.into(),
            guardrails: None,
        }
    }

    pub fn with_guardrails(mut self, guardrails: GuardrailSummary) -> Self {
        self.guardrails = Some(guardrails);
        self
    }
}

/// Analysis failures.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid report: {0}")]
    InvalidInput(String),

    #[error("analysis provider failed: {0}")]
    Provider(#[from] AIError),

    #[error("analysis failed: {0}")]
    Internal(String),
}

/// Port for report analysis.
#[async_trait]
pub trait ReportAnalyzer: Send + Sync {
    /// Analyze one report in the requested language.
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisOutcome, AnalysisError>;

    /// Short name reported alongside results (`keyword`, `lab`, `llm`).
    fn name(&self) -> &'static str;
}
