//! DiscardSubmissionHandler - Leaves the results view and forgets the submission.

use std::sync::Arc;

use crate::domain::foundation::SubmissionId;
use crate::ports::SubmissionStore;

use super::SubmissionError;

/// Handler for discarding a completed submission.
pub struct DiscardSubmissionHandler {
    store: Arc<dyn SubmissionStore>,
}

impl DiscardSubmissionHandler {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, submission_id: SubmissionId) -> Result<(), SubmissionError> {
        let mut submission = self
            .store
            .find(&submission_id)
            .await?
            .ok_or_else(|| SubmissionError::not_found(submission_id))?;

        submission.discard()?;
        self.store.remove(&submission_id).await?;

        tracing::debug!(submission_id = %submission_id, "submission discarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySubmissionStore;
    use crate::domain::report::{AnalysisInput, Language, ReportClassifier, Submission};

    #[tokio::test]
    async fn discards_and_removes() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let mut submission = Submission::start(AnalysisInput::new("cholesterol", Language::English));
        let result = ReportClassifier::classify(submission.input());
        submission.complete(result).unwrap();
        store.save(&submission).await.unwrap();

        let handler = DiscardSubmissionHandler::new(store.clone());
        handler.handle(submission.id()).await.unwrap();

        assert!(store.find(&submission.id()).await.unwrap().is_none());
        assert!(matches!(
            handler.handle(submission.id()).await,
            Err(SubmissionError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn in_flight_submission_cannot_be_discarded() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let submission = Submission::start(AnalysisInput::new("cholesterol", Language::English));
        store.save(&submission).await.unwrap();

        let err = DiscardSubmissionHandler::new(store.clone())
            .handle(submission.id())
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::InvalidState(_)));
        assert!(!store.is_empty().await);
    }
}
