//! Scripted AI provider for tests.
//!
//! Responses are queued up front and handed out in order; once the queue is
//! empty every call answers `{}`. Every request is recorded so tests can
//! inspect the prompt the analyzer built.
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_json_response(json!({"simplified_explanation": "..."}))
//!     .with_error(MockError::Unavailable { message: "down".into() });
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

const MOCK_MODEL: &str = "mock-model-1";

#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    script: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    delay: Duration,
}

#[derive(Debug, Clone)]
pub enum MockResponse {
    Content(String),
    Error(MockError),
}

/// Failures the mock can be scripted to return. `AIError` is not `Clone`,
/// so the script holds these instead.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
    Parse { message: String },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
            MockError::Parse { message } => AIError::parse(message),
        }
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, response: MockResponse) -> Self {
        self.script.lock().unwrap().push_back(response);
        self
    }

    /// Queues raw completion text.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Content(content.into()))
    }

    /// Queues a JSON document as completion text.
    pub fn with_json_response(self, body: serde_json::Value) -> Self {
        self.with_response(body.to_string())
    }

    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockResponse::Error(error))
    }

    /// Sleeps this long before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<CompletionRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let next = self.script.lock().unwrap().pop_front();
        match next.unwrap_or_else(|| MockResponse::Content("{}".to_string())) {
            MockResponse::Content(content) => Ok(CompletionResponse {
                usage: TokenUsage::new(10, content.len() as u32 / 4),
                content,
                model: MOCK_MODEL.to_string(),
                finish_reason: FinishReason::Stop,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", MOCK_MODEL, 128_000)
    }
}
