//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - OpenAI-compatible chat-completions provider and a mock
//! - `analysis` - keyword, lab and LLM report analyzers
//! - `http` - axum REST endpoints
//! - `storage` - in-memory submission store

pub mod ai;
pub mod analysis;
pub mod http;
pub mod storage;
