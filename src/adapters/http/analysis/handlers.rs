//! HTTP handlers for report analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::analysis::{
    DiscardSubmissionHandler, ExportSummaryHandler, GetResultsHandler, GetResultsQuery,
    SubmissionError, SubmitReportCommand, SubmitReportHandler,
};
use crate::domain::foundation::SubmissionId;
use crate::domain::report::{AnalysisInput, Language};
use crate::ports::{AnalysisError, ReportAnalyzer};

use super::dto::{
    ErrorResponse, HealthResponse, LanguagesResponse, SimplifyErrorResponse,
    SimplifyReportRequest, SimplifyReportResponse, SubmissionResponse, SubmitReportRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisHandlers {
    submit_handler: Arc<SubmitReportHandler>,
    results_handler: Arc<GetResultsHandler>,
    export_handler: Arc<ExportSummaryHandler>,
    discard_handler: Arc<DiscardSubmissionHandler>,
    analyzer: Arc<dyn ReportAnalyzer>,
    verbose_errors: bool,
}

impl AnalysisHandlers {
    pub fn new(
        submit_handler: Arc<SubmitReportHandler>,
        results_handler: Arc<GetResultsHandler>,
        export_handler: Arc<ExportSummaryHandler>,
        discard_handler: Arc<DiscardSubmissionHandler>,
        analyzer: Arc<dyn ReportAnalyzer>,
    ) -> Self {
        Self {
            submit_handler,
            results_handler,
            export_handler,
            discard_handler,
            analyzer,
            verbose_errors: false,
        }
    }

    /// Include internal error text in 5xx bodies.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    fn error(&self, error: SubmissionError) -> AnalysisApiError {
        AnalysisApiError::Submission {
            error,
            verbose: self.verbose_errors,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/submissions - Analyze a report and keep the result
pub async fn submit_report(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<SubmitReportRequest>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let language = parse_language(req.language.as_deref())?;

    let cmd = SubmitReportCommand {
        report: req.report,
        language,
        previous_report: req.previous_report,
    };

    let submitted = handlers
        .submit_handler
        .handle(cmd)
        .await
        .map_err(|e| handlers.error(e))?;

    let response = SubmissionResponse::try_from(submitted)
        .map_err(|e| handlers.error(SubmissionError::from(e)))?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/submissions/:id - Results view of a submission
pub async fn get_submission(
    State(handlers): State<AnalysisHandlers>,
    Path(submission_id): Path<String>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let submission_id = parse_submission_id(&submission_id)?;

    let results = handlers
        .results_handler
        .handle(GetResultsQuery { submission_id })
        .await
        .map_err(|e| handlers.error(e))?;

    Ok(Json(SubmissionResponse::from(results)))
}

/// GET /api/submissions/:id/summary - Plain-text export
pub async fn export_summary(
    State(handlers): State<AnalysisHandlers>,
    Path(submission_id): Path<String>,
) -> Result<Response, AnalysisApiError> {
    let submission_id = parse_submission_id(&submission_id)?;

    let summary = handlers
        .export_handler
        .handle(submission_id)
        .await
        .map_err(|e| handlers.error(e))?;

    let disposition = summary.content_disposition();
    let content_type = summary.content_type;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        summary.into_bytes(),
    )
        .into_response())
}

/// DELETE /api/submissions/:id - Leave the results view
pub async fn discard_submission(
    State(handlers): State<AnalysisHandlers>,
    Path(submission_id): Path<String>,
) -> Result<StatusCode, AnalysisApiError> {
    let submission_id = parse_submission_id(&submission_id)?;

    handlers
        .discard_handler
        .handle(submission_id)
        .await
        .map_err(|e| handlers.error(e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/simplify-report - Explanation only, nothing stored
pub async fn simplify_report(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<SimplifyReportRequest>,
) -> Response {
    let report = match req.report.filter(|r| !r.trim().is_empty()) {
        Some(report) => report,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(SimplifyErrorResponse::new("report field is required.")),
            )
                .into_response()
        }
    };

    let language = match req.language.as_deref().map(str::parse::<Language>) {
        None => Language::default(),
        Some(Ok(language)) => language,
        Some(Err(e)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(SimplifyErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    };

    let input = AnalysisInput::new(report, language);
    match handlers.analyzer.analyze(&input).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(SimplifyReportResponse::success(
                outcome.result.simplified_explanation,
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("simplify-report analysis failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SimplifyErrorResponse::new("Report could not be simplified.")),
            )
                .into_response()
        }
    }
}

/// GET /api/languages - Supported explanation languages
pub async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse::supported())
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn parse_submission_id(raw: &str) -> Result<SubmissionId, AnalysisApiError> {
    raw.parse()
        .map_err(|_| AnalysisApiError::BadRequest("Invalid submission ID".to_string()))
}

fn parse_language(raw: Option<&str>) -> Result<Language, AnalysisApiError> {
    match raw {
        None => Ok(Language::default()),
        Some(raw) => raw
            .parse::<Language>()
            .map_err(|e| AnalysisApiError::BadRequest(e.to_string())),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum AnalysisApiError {
    BadRequest(String),
    Submission {
        error: SubmissionError,
        verbose: bool,
    },
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> Response {
        let (error, verbose) = match self {
            AnalysisApiError::BadRequest(message) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message)))
                    .into_response();
            }
            AnalysisApiError::Submission { error, verbose } => (error, verbose),
        };

        let internal_message = |fallback: &str| {
            if verbose {
                error.to_string()
            } else {
                fallback.to_string()
            }
        };

        let (status, body) = match &error {
            SubmissionError::ReportTooLong { max, actual } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::new("REPORT_TOO_LONG", error.to_string()).with_details(
                    serde_json::json!({ "max_chars": max, "actual_chars": actual }),
                ),
            ),
            SubmissionError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found("Submission", &id.to_string()).with_redirect(),
            ),
            SubmissionError::ResultsUnavailable(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("RESULTS_UNAVAILABLE", error.to_string()).with_redirect(),
            ),
            SubmissionError::InvalidState(_) => (
                StatusCode::CONFLICT,
                ErrorResponse::new("INVALID_STATE_TRANSITION", error.to_string()),
            ),
            SubmissionError::Analysis(AnalysisError::InvalidInput(_)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_REPORT", error.to_string()),
            ),
            SubmissionError::Analysis(AnalysisError::Provider(_)) => {
                tracing::error!("analysis provider failed: {}", error);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::new(
                        "ANALYZER_UNAVAILABLE",
                        internal_message("The analysis service is unavailable"),
                    ),
                )
            }
            SubmissionError::Analysis(AnalysisError::Internal(_)) => {
                tracing::error!("analysis failed: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal(internal_message("Analysis failed")),
                )
            }
            SubmissionError::Storage(_) => {
                tracing::error!("submission storage failed: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("STORAGE_ERROR", internal_message("Storage error")),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
