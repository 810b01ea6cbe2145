//! Lab analyzer - parses reference ranges out of the report and reasons over them.

use async_trait::async_trait;

use crate::domain::guardrails::{run_input_guardrails, GuardrailReport, GuardrailSummary};
use crate::domain::lab::{compare_reports, parse_lab_lines, LabNarrative, LabParameter, TrendSnapshot};
use crate::domain::report::{AnalysisInput, AnalysisResult};
use crate::ports::{AnalysisError, AnalysisOutcome, ReportAnalyzer};

/// Everything the lab pipeline derived from one input.
#[derive(Debug, Clone)]
pub struct LabAnalysis {
    pub parameters: Vec<LabParameter>,
    pub trend: TrendSnapshot,
    pub input_guardrails: GuardrailReport,
    pub result: AnalysisResult,
}

/// Deterministic analyzer over parsed lab lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabReportAnalyzer;

impl LabReportAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Parses, classifies and narrates one input.
    pub fn run(&self, input: &AnalysisInput) -> LabAnalysis {
        let parameters = parse_lab_lines(&input.report_text);

        let trend = match input.previous_report_text.as_deref() {
            Some(previous) => compare_reports(&parse_lab_lines(previous), &parameters),
            None => TrendSnapshot::single_report(),
        };

        let narrative = LabNarrative::new(&parameters);
        let result = AnalysisResult {
            key_observations: narrative.key_observations(Some(&trend)),
            risk_findings: parameters.iter().filter_map(LabParameter::to_finding).collect(),
            simplified_explanation: narrative.explanation(input.language),
            doctor_summary: narrative.doctor_summary(),
            trend: trend.direction,
        };

        let input_guardrails = run_input_guardrails(&parameters);
        if !input_guardrails.safe {
            tracing::debug!("input guardrails flagged report: {}", input_guardrails.reason);
        }

        LabAnalysis {
            parameters,
            trend,
            input_guardrails,
            result,
        }
    }
}

#[async_trait]
impl ReportAnalyzer for LabReportAnalyzer {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisOutcome, AnalysisError> {
        let analysis = self.run(input);
        Ok(AnalysisOutcome::new(analysis.result, self.name())
            .with_guardrails(GuardrailSummary::input_only(analysis.input_guardrails)))
    }

    fn name(&self) -> &'static str {
        "lab"
    }
}
