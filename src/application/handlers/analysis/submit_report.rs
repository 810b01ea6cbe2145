//! SubmitReportHandler - Command handler for analyzing a pasted report.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::guardrails::GuardrailSummary;
use crate::domain::report::{AnalysisInput, Language, Submission};
use crate::ports::{ReportAnalyzer, SubmissionStore};

use super::SubmissionError;

/// Command to analyze a report.
#[derive(Debug, Clone)]
pub struct SubmitReportCommand {
    pub report: String,
    pub language: Language,
    pub previous_report: Option<String>,
}

/// Limits and pacing for submissions.
#[derive(Debug, Clone)]
pub struct SubmitReportConfig {
    /// Longest accepted report, in characters.
    pub max_report_chars: usize,
    /// Cosmetic wait before analysis starts. Not a timeout.
    pub simulated_delay: Duration,
}

impl Default for SubmitReportConfig {
    fn default() -> Self {
        Self {
            max_report_chars: 10_000,
            simulated_delay: Duration::from_millis(1500),
        }
    }
}

/// Result of a completed submission.
#[derive(Debug, Clone)]
pub struct SubmitReportResult {
    pub submission: Submission,
    pub analyzer: String,
    pub guardrails: Option<GuardrailSummary>,
}

/// Handler for report submissions.
pub struct SubmitReportHandler {
    analyzer: Arc<dyn ReportAnalyzer>,
    store: Arc<dyn SubmissionStore>,
    config: SubmitReportConfig,
}

impl SubmitReportHandler {
    pub fn new(
        analyzer: Arc<dyn ReportAnalyzer>,
        store: Arc<dyn SubmissionStore>,
        config: SubmitReportConfig,
    ) -> Self {
        Self {
            analyzer,
            store,
            config,
        }
    }

    pub async fn handle(&self, cmd: SubmitReportCommand) -> Result<SubmitReportResult, SubmissionError> {
        // 1. Enforce the size limit
        let actual = cmd.report.chars().count();
        if actual > self.config.max_report_chars {
            return Err(SubmissionError::ReportTooLong {
                max: self.config.max_report_chars,
                actual,
            });
        }

        // 2. Start the submission
        let mut input = AnalysisInput::new(cmd.report, cmd.language);
        if let Some(previous) = cmd.previous_report.filter(|p| !p.trim().is_empty()) {
            input = input.with_previous_report(previous);
        }
        let mut submission = Submission::start(input);

        // 3. Cosmetic pause
        if !self.config.simulated_delay.is_zero() {
            tokio::time::sleep(self.config.simulated_delay).await;
        }

        // 4. Analyze
        let outcome = self.analyzer.analyze(submission.input()).await?;
        tracing::info!(
            submission_id = %submission.id(),
            analyzer = %outcome.analyzer,
            findings = outcome.result.risk_findings.len(),
            "report analyzed"
        );

        // 5. Complete and persist
        submission.complete(outcome.result)?;
        self.store.save(&submission).await?;

        Ok(SubmitReportResult {
            submission,
            analyzer: outcome.analyzer,
            guardrails: outcome.guardrails,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::analysis::{KeywordReportAnalyzer, LabReportAnalyzer};
    use crate::adapters::storage::InMemorySubmissionStore;
    use crate::domain::report::{ReportClassifier, SubmissionStatus};
    use crate::ports::{AnalysisError, AnalysisOutcome};
    use async_trait::async_trait;

    fn config() -> SubmitReportConfig {
        SubmitReportConfig {
            max_report_chars: 100,
            simulated_delay: Duration::ZERO,
        }
    }

    fn command(report: &str) -> SubmitReportCommand {
        SubmitReportCommand {
            report: report.to_string(),
            language: Language::English,
            previous_report: None,
        }
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl ReportAnalyzer for FailingAnalyzer {
        async fn analyze(&self, _input: &AnalysisInput) -> Result<AnalysisOutcome, AnalysisError> {
            Err(AnalysisError::Internal("boom".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn completes_and_stores_submission() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let handler = SubmitReportHandler::new(Arc::new(KeywordReportAnalyzer::new()), store.clone(), config());

        let result = handler.handle(command("cholesterol and hemoglobin")).await.unwrap();

        assert_eq!(result.submission.status(), SubmissionStatus::Complete);
        assert_eq!(result.analyzer, "keyword");
        assert_eq!(
            result.submission.result().unwrap(),
            &ReportClassifier::classify(&AnalysisInput::new("cholesterol and hemoglobin", Language::English))
        );
        assert!(store.find(&result.submission.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn empty_report_is_accepted() {
        let handler = SubmitReportHandler::new(
            Arc::new(KeywordReportAnalyzer::new()),
            Arc::new(InMemorySubmissionStore::new()),
            config(),
        );

        let result = handler.handle(command("")).await.unwrap();
        assert!(result.submission.result().unwrap().risk_findings.is_empty());
    }

    #[tokio::test]
    async fn rejects_report_over_limit() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let handler = SubmitReportHandler::new(Arc::new(KeywordReportAnalyzer::new()), store.clone(), config());

        let err = handler.handle(command(&"x".repeat(101))).await.unwrap_err();

        assert!(matches!(err, SubmissionError::ReportTooLong { max: 100, actual: 101 }));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn blank_previous_report_is_ignored() {
        let handler = SubmitReportHandler::new(
            Arc::new(LabReportAnalyzer::new()),
            Arc::new(InMemorySubmissionStore::new()),
            config(),
        );
        let mut cmd = command("Hemoglobin 11.2 g/dL 12-16");
        cmd.previous_report = Some("   ".to_string());

        let result = handler.handle(cmd).await.unwrap();

        assert!(result.submission.input().previous_report_text.is_none());
        assert!(result.guardrails.is_some());
    }

    #[tokio::test]
    async fn analyzer_failure_is_not_stored() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let handler = SubmitReportHandler::new(Arc::new(FailingAnalyzer), store.clone(), config());

        let err = handler.handle(command("cholesterol")).await.unwrap_err();

        assert!(matches!(err, SubmissionError::Analysis(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn waits_for_simulated_delay() {
        let handler = SubmitReportHandler::new(
            Arc::new(KeywordReportAnalyzer::new()),
            Arc::new(InMemorySubmissionStore::new()),
            SubmitReportConfig {
                max_report_chars: 100,
                simulated_delay: Duration::from_millis(30),
            },
        );
        let start = tokio::time::Instant::now();

        handler.handle(command("cholesterol")).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
