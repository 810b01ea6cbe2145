//! GetResultsHandler - Query handler for a completed submission's results.

use std::sync::Arc;

use crate::domain::foundation::SubmissionId;
use crate::domain::report::{AnalysisResult, HealthSummary, Submission};
use crate::ports::SubmissionStore;

use super::SubmissionError;

/// Query for the results of one submission.
#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub submission_id: SubmissionId,
}

/// Results view of a completed submission.
#[derive(Debug, Clone)]
pub struct SubmissionResults {
    pub submission: Submission,
    pub result: AnalysisResult,
    pub summary: HealthSummary,
}

/// Handler for the results view.
///
/// Unknown and discarded submissions are both `NotFound`; there is no
/// partially rendered results view.
pub struct GetResultsHandler {
    store: Arc<dyn SubmissionStore>,
}

impl GetResultsHandler {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetResultsQuery) -> Result<SubmissionResults, SubmissionError> {
        let submission = self
            .store
            .find(&query.submission_id)
            .await?
            .ok_or_else(|| SubmissionError::not_found(query.submission_id))?;

        let result = submission.result()?.clone();
        let summary = HealthSummary::from_result(&result);

        Ok(SubmissionResults {
            submission,
            result,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySubmissionStore;
    use crate::domain::report::{AnalysisInput, Language, ReportClassifier};

    async fn stored(store: &InMemorySubmissionStore, complete: bool) -> SubmissionId {
        let mut submission = Submission::start(AnalysisInput::new("cholesterol", Language::Hindi));
        if complete {
            let result = ReportClassifier::classify(submission.input());
            submission.complete(result).unwrap();
        }
        store.save(&submission).await.unwrap();
        submission.id()
    }

    #[tokio::test]
    async fn returns_result_and_summary() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let id = stored(&store, true).await;

        let results = GetResultsHandler::new(store)
            .handle(GetResultsQuery { submission_id: id })
            .await
            .unwrap();

        assert_eq!(results.result.risk_findings.len(), 1);
        assert_eq!(
            results.summary.text,
            format!("{}\n\n{}", results.result.simplified_explanation, results.result.doctor_summary)
        );
    }

    #[tokio::test]
    async fn unknown_submission_is_not_found() {
        let handler = GetResultsHandler::new(Arc::new(InMemorySubmissionStore::new()));
        let err = handler
            .handle(GetResultsQuery {
                submission_id: SubmissionId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::NotFound(_)));
    }

    #[tokio::test]
    async fn incomplete_submission_has_no_results() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let id = stored(&store, false).await;

        let err = GetResultsHandler::new(store)
            .handle(GetResultsQuery { submission_id: id })
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::ResultsUnavailable(_)));
    }
}
