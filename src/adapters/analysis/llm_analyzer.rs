//! LLM analyzer - asks a chat-completions model for the narrative parts.
//!
//! Risk findings and the trend direction always come from the lab pipeline.
//! The model only writes the explanation, observations and doctor summary,
//! and its text goes through the output guardrails before anyone sees it.
//! Any provider or parse failure falls back to the lab analysis.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::domain::guardrails::run_output_guardrails;
use crate::domain::report::AnalysisInput;
use crate::ports::{
    AIProvider, AnalysisError, AnalysisOutcome, CompletionRequest, MessageRole, ReportAnalyzer,
    RequestMetadata,
};

use super::lab_analyzer::{LabAnalysis, LabReportAnalyzer};

const SYSTEM_PROMPT: &str = "You are a medical education assistant.";

const MAX_TOKENS: u32 = 900;
const TEMPERATURE: f32 = 0.2;

/// Fields the model is asked for; all optional so partial answers still help.
#[derive(Debug, Default, Deserialize)]
struct LlmNarrative {
    simplified_explanation: Option<String>,
    key_observations: Option<Vec<String>>,
    doctor_summary: Option<String>,
}

/// Analyzer backed by an [`AIProvider`].
pub struct LlmReportAnalyzer {
    provider: Arc<dyn AIProvider>,
    lab: LabReportAnalyzer,
}

impl LlmReportAnalyzer {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            lab: LabReportAnalyzer::new(),
        }
    }

    fn build_prompt(input: &AnalysisInput, analysis: &LabAnalysis) -> String {
        let data = json!({
            "language": input.language.name(),
            "parameters": analysis.parameters,
            "trend_hint": analysis.trend.hint,
        });
        let data = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());

        format!(
            "You are a safety-first health report interpreter.\n\
             \n\
             Rules:\n\
             - Explain only from the provided data.\n\
             - No diagnosis and no medication advice.\n\
             - Use calm, actionable, non-alarming language.\n\
             - Mention borderline values and changes over time.\n\
             - Write simplified_explanation in {language}; everything else in English.\n\
             \n\
             Return ONLY valid JSON with this schema:\n\
             {{\n\
             \x20 \"simplified_explanation\": \"plain-language explanation\",\n\
             \x20 \"key_observations\": [\"short observation\"],\n\
             \x20 \"doctor_summary\": \"concise handoff summary for a doctor\"\n\
             }}\n\
             \n\
             DATA:\n{data}\n",
            language = input.language.name(),
            data = data,
        )
    }

    async fn request_narrative(
        &self,
        input: &AnalysisInput,
        analysis: &LabAnalysis,
    ) -> Result<LlmNarrative, AnalysisError> {
        let request = CompletionRequest::new(RequestMetadata::new(None, uuid::Uuid::new_v4().to_string()))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, Self::build_prompt(input, analysis))
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(TEMPERATURE)
            .with_json_response();

        let response = self.provider.complete(request).await?;
        tracing::debug!(
            provider = %self.provider.provider_info().name,
            model = %response.model,
            tokens = response.usage.total_tokens,
            "narrative completion received"
        );

        let value = parse_json_response(&response.content)
            .ok_or_else(|| AnalysisError::Internal("model response was not JSON".to_string()))?;
        serde_json::from_value(value)
            .map_err(|e| AnalysisError::Internal(format!("unexpected narrative shape: {}", e)))
    }
}

/// Reads a JSON object out of model output: bare, fenced, or embedded in prose.
pub fn parse_json_response(content: &str) -> Option<serde_json::Value> {
    let mut value = content.trim();
    if value.is_empty() {
        return None;
    }

    if value.starts_with("```") {
        value = value.trim_matches('`').trim();
        if let Some(rest) = value.strip_prefix("json") {
            value = rest.trim();
        }
    }

    let parsed = serde_json::from_str::<serde_json::Value>(value).ok().or_else(|| {
        let start = value.find('{')?;
        let end = value.rfind('}')?;
        if end <= start {
            return None;
        }
        serde_json::from_str(&value[start..=end]).ok()
    })?;

    parsed.is_object().then_some(parsed)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[async_trait]
impl ReportAnalyzer for LlmReportAnalyzer {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisOutcome, AnalysisError> {
        let analysis = self.lab.run(input);

        let narrative = match self.request_narrative(input, &analysis).await {
            Ok(narrative) => narrative,
            Err(e) => {
                tracing::warn!("LLM analysis failed, using lab analysis: {}", e);
                return self.lab.analyze(input).await;
            }
        };

        let LabAnalysis {
            parameters,
            input_guardrails,
            mut result,
            ..
        } = analysis;

        if let Some(explanation) = non_blank(narrative.simplified_explanation) {
            result.simplified_explanation = explanation;
        }
        if let Some(summary) = non_blank(narrative.doctor_summary) {
            result.doctor_summary = summary;
        }
        if let Some(observations) = narrative
            .key_observations
            .filter(|o| o.iter().any(|s| !s.trim().is_empty()))
        {
            result.key_observations = observations;
        }

        let guardrails = run_output_guardrails(&mut result, &parameters, input_guardrails);

        Ok(AnalysisOutcome::new(result, self.name()).with_guardrails(guardrails))
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}
