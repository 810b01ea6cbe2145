//! In-Memory Submission Store Adapter
//!
//! Keeps submissions in process memory. Nothing is persisted; a restart
//! forgets every submission. Entries expire `ttl` after they last changed,
//! and the oldest are evicted once `capacity` is reached, so results a
//! client never discards do not pile up.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SubmissionId, Timestamp};
use crate::domain::report::Submission;
use crate::ports::SubmissionStore;

/// Default number of submissions kept at once.
pub const DEFAULT_CAPACITY: usize = 1_000;

/// Default time a submission is kept after it last changed.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// In-memory storage for submissions
#[derive(Debug, Clone)]
pub struct InMemorySubmissionStore {
    submissions: Arc<RwLock<HashMap<SubmissionId, Submission>>>,
    capacity: usize,
    ttl: Duration,
}

impl Default for InMemorySubmissionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

/// When the submission last changed.
fn last_touched(submission: &Submission) -> Timestamp {
    submission
        .completed_at()
        .copied()
        .unwrap_or(*submission.submitted_at())
}

impl InMemorySubmissionStore {
    /// Create a new in-memory store with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding at most `capacity` submissions, each for at most `ttl`.
    pub fn with_limits(capacity: usize, ttl: Duration) -> Self {
        Self {
            submissions: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Get the number of stored submissions
    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.submissions.read().await.is_empty()
    }

    fn is_expired(&self, submission: &Submission, now: &Timestamp) -> bool {
        let age = now
            .duration_since(&last_touched(submission))
            .to_std()
            .unwrap_or_default();
        age > self.ttl
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn save(&self, submission: &Submission) -> Result<(), DomainError> {
        let now = Timestamp::now();
        let mut submissions = self.submissions.write().await;

        let before = submissions.len();
        submissions.retain(|_, stored| !self.is_expired(stored, &now));
        let mut evicted = before - submissions.len();

        let id = submission.id();
        while !submissions.contains_key(&id) && submissions.len() >= self.capacity {
            let Some(oldest) = submissions
                .iter()
                .min_by_key(|(_, stored)| last_touched(stored))
                .map(|(key, _)| *key)
            else {
                break;
            };
            submissions.remove(&oldest);
            evicted += 1;
        }
        if evicted > 0 {
            tracing::debug!(evicted, remaining = submissions.len(), "evicted stored submissions");
        }

        submissions.insert(id, submission.clone());
        Ok(())
    }

    async fn find(&self, id: &SubmissionId) -> Result<Option<Submission>, DomainError> {
        let now = Timestamp::now();
        let submissions = self.submissions.read().await;
        Ok(submissions
            .get(id)
            .filter(|stored| !self.is_expired(stored, &now))
            .cloned())
    }

    async fn remove(&self, id: &SubmissionId) -> Result<bool, DomainError> {
        let mut submissions = self.submissions.write().await;
        Ok(submissions.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{AnalysisInput, Language, ReportClassifier, SubmissionStatus};

    fn submission() -> Submission {
        Submission::start(AnalysisInput::new("Cholesterol 250", Language::English))
    }

    #[tokio::test]
    async fn save_and_find() {
        let store = InMemorySubmissionStore::new();
        let submission = submission();

        store.save(&submission).await.unwrap();

        let found = store.find(&submission.id()).await.unwrap();
        assert_eq!(found, Some(submission));
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let store = InMemorySubmissionStore::new();
        assert!(store.find(&SubmissionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_replaces_existing() {
        let store = InMemorySubmissionStore::new();
        let mut submission = submission();
        store.save(&submission).await.unwrap();

        let result = ReportClassifier::classify(submission.input());
        submission.complete(result).unwrap();
        store.save(&submission).await.unwrap();

        assert_eq!(store.len().await, 1);
        let stored = store.find(&submission.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SubmissionStatus::Complete);
    }

    #[tokio::test]
    async fn remove_reports_existence() {
        let store = InMemorySubmissionStore::new();
        let submission = submission();
        store.save(&submission).await.unwrap();

        assert!(store.remove(&submission.id()).await.unwrap());
        assert!(!store.remove(&submission.id()).await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn oldest_submission_is_evicted_at_capacity() {
        let store = InMemorySubmissionStore::with_limits(2, DEFAULT_TTL);
        let first = submission();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let second = submission();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let third = submission();

        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();
        store.save(&third).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert!(store.find(&first.id()).await.unwrap().is_none());
        assert!(store.find(&second.id()).await.unwrap().is_some());
        assert!(store.find(&third.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn resaving_at_capacity_keeps_everything() {
        let store = InMemorySubmissionStore::with_limits(1, DEFAULT_TTL);
        let mut only = submission();
        store.save(&only).await.unwrap();

        only.complete(ReportClassifier::classify(only.input())).unwrap();
        store.save(&only).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(store.find(&only.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn expired_submissions_are_dropped() {
        let store = InMemorySubmissionStore::with_limits(DEFAULT_CAPACITY, Duration::from_millis(100));
        let stale = submission();
        store.save(&stale).await.unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(store.find(&stale.id()).await.unwrap().is_none());

        let fresh = submission();
        store.save(&fresh).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert!(store.find(&fresh.id()).await.unwrap().is_some());
    }
}
