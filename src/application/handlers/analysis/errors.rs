//! Errors raised by the submission handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, SubmissionId};
use crate::domain::report::ReportError;
use crate::ports::AnalysisError;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("report is {actual} characters long; the limit is {max}")]
    ReportTooLong { max: usize, actual: usize },

    #[error("submission {0} not found")]
    NotFound(SubmissionId),

    #[error("no analysis results are available for submission {0}")]
    ResultsUnavailable(SubmissionId),

    #[error("invalid submission state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("storage error: {0}")]
    Storage(#[from] DomainError),
}

impl SubmissionError {
    pub fn not_found(id: SubmissionId) -> Self {
        SubmissionError::NotFound(id)
    }
}

impl From<ReportError> for SubmissionError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::ResultsUnavailable(id) => SubmissionError::ResultsUnavailable(id),
            ReportError::InvalidTransition(e) => SubmissionError::InvalidState(e.to_string()),
        }
    }
}
