//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;

pub use analysis::{
    DiscardSubmissionHandler, ExportSummaryHandler, GetResultsHandler, GetResultsQuery,
    SubmissionError, SubmissionResults, SubmitReportCommand, SubmitReportConfig,
    SubmitReportHandler, SubmitReportResult,
};
