//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machines)
//! - `report` - Analysis input/output model, keyword classifier, submission lifecycle
//! - `lab` - Lab line parsing, reference-range classification, trends, narrative text
//! - `guardrails` - Input completeness checks and output safety checks

pub mod foundation;
pub mod guardrails;
pub mod lab;
pub mod report;
