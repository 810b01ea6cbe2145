//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (submit, discard) are kept apart from query handlers
//! (results, export).

pub mod handlers;

pub use handlers::{
    DiscardSubmissionHandler, ExportSummaryHandler, GetResultsHandler, GetResultsQuery,
    SubmissionError, SubmissionResults, SubmitReportCommand, SubmitReportConfig,
    SubmitReportHandler, SubmitReportResult,
};
