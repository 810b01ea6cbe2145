//! Report module - the analysis input/output model and the keyword classifier.
//!
//! # Components
//!
//! - `Language` - The five languages a user can pick
//! - `RiskFinding`, `RiskLevel`, `SeverityColor`, `Trend` - Result vocabulary
//! - `AnalysisInput`, `AnalysisResult` - What goes in and what comes out
//! - `ReportClassifier` - Deterministic keyword-matching analysis
//! - `HealthSummary` - Plain-text export shared by copy and download
//! - `Submission` - Idle/Submitting/Complete lifecycle of one submission

mod classifier;
mod finding;
mod language;
mod result;
mod submission;
mod summary;

pub use classifier::{
    ReportClassifier, DOCTOR_SUMMARY, EXPLANATION_ENGLISH, EXPLANATION_HINDI, KEY_OBSERVATIONS,
};
pub use finding::{RiskFinding, RiskLevel, SeverityColor, Trend};
pub use language::Language;
pub use result::{AnalysisInput, AnalysisResult};
pub use submission::{ReportError, Submission, SubmissionStatus};
pub use summary::{HealthSummary, DISCLAIMER, SUMMARY_CONTENT_TYPE, SUMMARY_FILENAME};
