//! AI Provider Adapters.
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAICompatibleProvider` - Any OpenAI-style chat-completions endpoint (Groq by default)

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{
    OpenAICompatibleConfig, OpenAICompatibleProvider, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
