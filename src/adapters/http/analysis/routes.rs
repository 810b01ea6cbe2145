//! HTTP routes for report analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    discard_submission, export_summary, get_submission, health, list_languages, simplify_report,
    submit_report, AnalysisHandlers,
};

/// Creates the analysis router with all endpoints.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/api/submissions", post(submit_report))
        .route(
            "/api/submissions/:id",
            get(get_submission).delete(discard_submission),
        )
        .route("/api/submissions/:id/summary", get(export_summary))
        .route("/api/simplify-report", post(simplify_report))
        .route("/api/languages", get(list_languages))
        .route("/health", get(health))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::analysis::KeywordReportAnalyzer;
    use crate::adapters::storage::InMemorySubmissionStore;
    use crate::application::handlers::analysis::{
        DiscardSubmissionHandler, ExportSummaryHandler, GetResultsHandler, SubmitReportConfig,
        SubmitReportHandler,
    };

    fn router() -> Router {
        let store = Arc::new(InMemorySubmissionStore::new());
        let analyzer = Arc::new(KeywordReportAnalyzer::new());
        let config = SubmitReportConfig {
            simulated_delay: Duration::ZERO,
            ..SubmitReportConfig::default()
        };
        analysis_routes(AnalysisHandlers::new(
            Arc::new(SubmitReportHandler::new(analyzer.clone(), store.clone(), config)),
            Arc::new(GetResultsHandler::new(store.clone())),
            Arc::new(ExportSummaryHandler::new(store.clone())),
            Arc::new(DiscardSubmissionHandler::new(store)),
            analyzer,
        ))
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_submission_id_is_bad_request() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/submissions/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
