//! HTTP adapter for report analysis endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, LanguageResponse, LanguagesResponse, SimplifyReportRequest,
    SimplifyReportResponse, SubmissionResponse, SubmitReportRequest, ANALYZE_PATH,
};
pub use handlers::{AnalysisApiError, AnalysisHandlers};
pub use routes::analysis_routes;
