//! Health Interpreter HTTP server.
//!
//! Run with: cargo run --bin health-interpreter

use std::sync::Arc;

use health_interpreter::adapters::storage::InMemorySubmissionStore;
use health_interpreter::app::{build_analyzer, build_app};
use health_interpreter::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    config.validate()?;
    if config.is_production() && config.features.verbose_errors {
        tracing::warn!("verbose_errors is enabled in production; internal error text will reach clients");
    }

    let analyzer = build_analyzer(&config)?;
    let store = Arc::new(InMemorySubmissionStore::with_limits(
        config.analysis.max_stored_submissions,
        config.analysis.submission_ttl(),
    ));
    let app = build_app(&config, analyzer, store);

    let addr = config.server.socket_addr()?;
    tracing::info!(
        environment = ?config.server.environment,
        "Health Interpreter listening on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
