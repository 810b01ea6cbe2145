//! Submission lifecycle: Idle → Submitting → Complete.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{StateMachine, SubmissionId, Timestamp, ValidationError};

use super::{AnalysisInput, AnalysisResult};

/// Where a submission is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Complete,
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, target),
            (Idle, Submitting) | (Submitting, Complete) | (Complete, Idle) | (Complete, Submitting)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Idle => vec![Submitting],
            Submitting => vec![Complete],
            Complete => vec![Idle, Submitting],
        }
    }
}

/// Errors raised by the submission aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("no analysis results are available for submission {0}")]
    ResultsUnavailable(SubmissionId),

    #[error(transparent)]
    InvalidTransition(#[from] ValidationError),
}

/// One report submission and, once complete, its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    id: SubmissionId,
    input: AnalysisInput,
    status: SubmissionStatus,
    result: Option<AnalysisResult>,
    submitted_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl Submission {
    /// Starts a new submission for the given input.
    pub fn start(input: AnalysisInput) -> Self {
        Self {
            id: SubmissionId::new(),
            input,
            status: SubmissionStatus::Submitting,
            result: None,
            submitted_at: Timestamp::now(),
            completed_at: None,
        }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn input(&self) -> &AnalysisInput {
        &self.input
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn submitted_at(&self) -> &Timestamp {
        &self.submitted_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// Attaches the result and moves to `Complete`.
    pub fn complete(&mut self, result: AnalysisResult) -> Result<(), ReportError> {
        self.status = self.status.transition_to(SubmissionStatus::Complete)?;
        self.result = Some(result);
        self.completed_at = Some(Timestamp::now());
        Ok(())
    }

    /// User left the results view; the result is discarded.
    pub fn discard(&mut self) -> Result<(), ReportError> {
        self.status = self.status.transition_to(SubmissionStatus::Idle)?;
        self.result = None;
        Ok(())
    }

    /// The result, only while the submission is complete.
    pub fn result(&self) -> Result<&AnalysisResult, ReportError> {
        match (&self.status, &self.result) {
            (SubmissionStatus::Complete, Some(result)) => Ok(result),
            _ => Err(ReportError::ResultsUnavailable(self.id)),
        }
    }
}
