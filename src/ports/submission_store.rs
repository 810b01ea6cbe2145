//! Submission store port.
//!
//! Holds submissions between the submit request and the results, export
//! and discard requests that follow it.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SubmissionId};
use crate::domain::report::Submission;

/// Store for `Submission` aggregates.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert or replace a submission.
    async fn save(&self, submission: &Submission) -> Result<(), DomainError>;

    /// Find a submission by id.
    async fn find(&self, id: &SubmissionId) -> Result<Option<Submission>, DomainError>;

    /// Remove a submission; returns whether it existed.
    async fn remove(&self, id: &SubmissionId) -> Result<bool, DomainError>;
}
