// src/core/mod.rs

/// Data structures shared by the workflow, the client and the UI:
/// `AnalysisResult`, `FlaggedSection` and the score classifications.
pub mod models;

/// The analysis contract and its Gemini implementation.
pub mod client;

/// The result-retrieval workflow: validation, in-flight guard, tab state.
pub mod workflow;

/// Markdown export of a finished report.
pub mod export;
