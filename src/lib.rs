//! Health Interpreter - plain-language medical report interpretation
//!
//! Takes pasted lab report text plus a language choice and returns risk flags,
//! key observations, a simplified explanation, a doctor-facing summary and a
//! trend indicator. Nothing is diagnosed and nothing outlives the process.
//!
//! Layout follows ports and adapters:
//! - `domain` - pure analysis logic (classifier, lab parsing, guardrails)
//! - `ports` - async traits for analyzers, AI providers and storage
//! - `adapters` - analyzers, AI providers, in-memory store, HTTP
//! - `application` - command and query handlers
//! - `config` - environment-driven configuration

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
