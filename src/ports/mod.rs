//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReportAnalyzer` - Turns a report into an `AnalysisResult`
//! - `AIProvider` - Chat-completion access for the LLM analyzer
//! - `SubmissionStore` - Keeps submissions between requests

mod ai_provider;
mod report_analyzer;
mod submission_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use report_analyzer::{AnalysisError, AnalysisOutcome, ReportAnalyzer};
pub use submission_store::SubmissionStore;
