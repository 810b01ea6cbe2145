//! Report analyzers.
//!
//! - `KeywordReportAnalyzer` - Deterministic keyword scan (default)
//! - `LabReportAnalyzer` - Parses reference ranges and reasons over them
//! - `LlmReportAnalyzer` - Model-written narrative over the lab analysis

mod keyword_analyzer;
mod lab_analyzer;
mod llm_analyzer;

pub use keyword_analyzer::KeywordReportAnalyzer;
pub use lab_analyzer::{LabAnalysis, LabReportAnalyzer};
pub use llm_analyzer::{parse_json_response, LlmReportAnalyzer};
