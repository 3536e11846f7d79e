// src/core/client/mod.rs

// This file acts as the public interface for the `client` module: the
// analysis contract and the Gemini implementation behind it.
pub mod gemini;

use crate::core::models::AnalysisResult;
use async_trait::async_trait;

/// Errors raised while talking to the analysis service.
///
/// The workflow treats every variant the same way; the distinction only
/// matters for the log file.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Authentication error: missing API key")]
    MissingApiKey,
}

pub type ClientResult<T> = Result<T, ClientError>;

/// The external collaborator that performs the originality assessment.
///
/// Implementors receive the raw submitted text and either produce a full
/// `AnalysisResult` or fail. They are not required to re-validate the text.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, text: &str) -> ClientResult<AnalysisResult>;
}
