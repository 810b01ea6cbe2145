//! Composition root: wires config, analyzer, store and HTTP layers.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::ai::{OpenAICompatibleConfig, OpenAICompatibleProvider};
use crate::adapters::analysis::{KeywordReportAnalyzer, LabReportAnalyzer, LlmReportAnalyzer};
use crate::adapters::http::{analysis_routes, AnalysisHandlers};
use crate::application::handlers::analysis::{
    DiscardSubmissionHandler, ExportSummaryHandler, GetResultsHandler, SubmitReportConfig,
    SubmitReportHandler,
};
use crate::config::{AnalyzerKind, AppConfig};
use crate::ports::{AIError, ReportAnalyzer, SubmissionStore};

/// Builds the analyzer selected by `analysis.analyzer`.
pub fn build_analyzer(config: &AppConfig) -> Result<Arc<dyn ReportAnalyzer>, AIError> {
    let analyzer: Arc<dyn ReportAnalyzer> = match config.analysis.analyzer {
        AnalyzerKind::Keyword => Arc::new(KeywordReportAnalyzer::new()),
        AnalyzerKind::Lab => Arc::new(LabReportAnalyzer::new()),
        AnalyzerKind::Llm => {
            let api_key = config
                .ai
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .ok_or(AIError::AuthenticationFailed)?;

            let provider = OpenAICompatibleProvider::new(
                OpenAICompatibleConfig::new(api_key)
                    .with_base_url(config.ai.base_url.clone())
                    .with_model(config.ai.model.clone())
                    .with_timeout(config.ai.timeout())
                    .with_max_retries(config.ai.max_retries),
            )?;
            Arc::new(LlmReportAnalyzer::new(Arc::new(provider)))
        }
    };

    tracing::info!(analyzer = analyzer.name(), "report analyzer ready");
    Ok(analyzer)
}

/// Builds the full application router with middleware.
pub fn build_app(
    config: &AppConfig,
    analyzer: Arc<dyn ReportAnalyzer>,
    store: Arc<dyn SubmissionStore>,
) -> Router {
    let submit_config = SubmitReportConfig {
        max_report_chars: config.analysis.max_report_chars,
        simulated_delay: config.analysis.simulated_delay(),
    };

    let handlers = AnalysisHandlers::new(
        Arc::new(SubmitReportHandler::new(
            analyzer.clone(),
            store.clone(),
            submit_config,
        )),
        Arc::new(GetResultsHandler::new(store.clone())),
        Arc::new(ExportSummaryHandler::new(store.clone())),
        Arc::new(DiscardSubmissionHandler::new(store)),
        analyzer,
    )
    .with_verbose_errors(config.features.verbose_errors);

    let app = analysis_routes(handlers)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server.cors_origins_list()));

    if config.features.enable_tracing {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
