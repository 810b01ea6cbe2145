//! Report submission command and query handlers.

mod discard_submission;
mod errors;
mod export_summary;
mod get_results;
mod submit_report;

pub use discard_submission::DiscardSubmissionHandler;
pub use errors::SubmissionError;
pub use export_summary::ExportSummaryHandler;
pub use get_results::{GetResultsHandler, GetResultsQuery, SubmissionResults};
pub use submit_report::{
    SubmitReportCommand, SubmitReportConfig, SubmitReportHandler, SubmitReportResult,
};
