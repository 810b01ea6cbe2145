//! Storage adapters.

mod in_memory_submission_store;

pub use in_memory_submission_store::InMemorySubmissionStore;
