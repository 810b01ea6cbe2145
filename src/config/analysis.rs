//! Report analysis configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Which analyzer handles submissions
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    /// Keyword scan with fixed text
    #[default]
    Keyword,
    /// Reference-range analysis of parsed lab lines
    Lab,
    /// Model-written narrative over the lab analysis
    Llm,
}

/// Analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub analyzer: AnalyzerKind,

    /// Cosmetic pause before analysis, in milliseconds
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,

    /// Longest accepted report, in characters
    #[serde(default = "default_max_report_chars")]
    pub max_report_chars: usize,

    /// How long an undiscarded submission is kept, in seconds
    #[serde(default = "default_submission_ttl_secs")]
    pub submission_ttl_secs: u64,

    /// Most submissions held at once; the oldest go first
    #[serde(default = "default_max_stored_submissions")]
    pub max_stored_submissions: usize,
}

impl AnalysisConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn submission_ttl(&self) -> Duration {
        Duration::from_secs(self.submission_ttl_secs)
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_report_chars == 0 || self.max_report_chars > 1_000_000 {
            return Err(ValidationError::InvalidReportLimit);
        }
        if self.simulated_delay_ms > 10_000 {
            return Err(ValidationError::InvalidSimulatedDelay);
        }
        if self.submission_ttl_secs == 0 || self.max_stored_submissions == 0 {
            return Err(ValidationError::InvalidSubmissionRetention);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerKind::default(),
            simulated_delay_ms: default_simulated_delay_ms(),
            max_report_chars: default_max_report_chars(),
            submission_ttl_secs: default_submission_ttl_secs(),
            max_stored_submissions: default_max_stored_submissions(),
        }
    }
}

fn default_simulated_delay_ms() -> u64 {
    1500
}

fn default_max_report_chars() -> usize {
    10_000
}

fn default_submission_ttl_secs() -> u64 {
    1800
}

fn default_max_stored_submissions() -> usize {
    1000
}
