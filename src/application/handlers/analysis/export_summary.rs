//! ExportSummaryHandler - Builds the plain-text export of a submission.

use std::sync::Arc;

use crate::domain::foundation::SubmissionId;
use crate::domain::report::HealthSummary;
use crate::ports::SubmissionStore;

use super::SubmissionError;

/// Handler for the copy/download export.
pub struct ExportSummaryHandler {
    store: Arc<dyn SubmissionStore>,
}

impl ExportSummaryHandler {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, submission_id: SubmissionId) -> Result<HealthSummary, SubmissionError> {
        let submission = self
            .store
            .find(&submission_id)
            .await?
            .ok_or_else(|| SubmissionError::not_found(submission_id))?;

        Ok(HealthSummary::from_result(submission.result()?))
    }
}
