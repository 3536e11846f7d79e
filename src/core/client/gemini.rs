// src/core/client/gemini.rs

use super::{AnalysisClient, ClientError, ClientResult};
use crate::config::Settings;
use crate::core::models::AnalysisResult;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error, info};

// Matches a whole reply wrapped in a Markdown code fence, with or without a language tag.
static RE_CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*\n?(.*?)\n?\s*```\s*$").unwrap());

// JSON schema handed to Gemini so that the reply is a bare `AnalysisResult` object.
static RESPONSE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": {
                "type": "INTEGER",
                "description": "Originality score from 0 (copied) to 100 (fully original)."
            },
            "similarityPercentage": {
                "type": "INTEGER",
                "description": "Estimated share of the text, 0-100, that matches existing sources."
            },
            "analysis": {
                "type": "STRING",
                "description": "Narrative assessment of originality and AI-generated patterns."
            },
            "flaggedSections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "text": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["text", "reason"]
                }
            }
        },
        "required": ["score", "similarityPercentage", "analysis", "flaggedSections"]
    })
});

const INSTRUCTIONS: &str = "You are an academic integrity reviewer for a scholarly journal. \
Assess the manuscript excerpt below for originality. Look for passages that are likely \
copied or closely paraphrased from published work, and for patterns typical of \
AI-generated prose. Return an originality score (0-100, higher is more original), an \
estimated similarity percentage (0-100), a concise analysis, and the specific excerpts \
you consider suspicious, each quoted verbatim with the reason.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: &'static str,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: &'static str,
    response_schema: &'static Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
    #[serde(default)]
    total_token_count: Option<u32>,
}

/// Analysis client backed by the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    settings: Settings,
    client: Client,
}

impl GeminiClient {
    pub fn new(settings: Settings) -> ClientResult<Self> {
        if settings.api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        let client = Client::builder()
            .user_agent(concat!("OriginalityRS/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout)
            .build()?;

        Ok(Self { settings, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.settings.api_base.as_str().trim_end_matches('/'),
            self.settings.model,
            self.settings.api_key
        )
    }

    fn build_request(&self, text: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart { text: build_prompt(text) }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                response_mime_type: "application/json",
                response_schema: &RESPONSE_SCHEMA,
            },
        }
    }
}

#[async_trait]
impl AnalysisClient for GeminiClient {
    async fn analyze(&self, text: &str) -> ClientResult<AnalysisResult> {
        let url = self.endpoint();
        info!(model = %self.settings.model, chars = text.chars().count(), "Requesting originality analysis.");
        debug!(url = %url.replace(&self.settings.api_key, "***"), "Sending request to Gemini API.");

        let response = self
            .client
            .post(&url)
            .json(&self.build_request(text))
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!(error = %e, "Gemini request failed.");
                ClientError::Http(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ClientError::Http(e.without_url()))?;
        debug!(status = %status, bytes = body.len(), "Received Gemini response.");

        if !status.is_success() {
            error!(status = %status, "Gemini API returned an error status.");
            return Err(ClientError::Api { status: status.as_u16(), body });
        }

        let result = parse_generate_response(&body)?;
        info!(
            score = result.score,
            similarity = result.similarity_percentage,
            flagged = result.flagged_sections.len(),
            "Originality analysis completed."
        );
        Ok(result)
    }
}

fn build_prompt(text: &str) -> String {
    format!("{INSTRUCTIONS}\n\nText to analyze:\n\"\"\"\n{text}\n\"\"\"")
}

/// Extracts the `AnalysisResult` from a raw `generateContent` response body.
fn parse_generate_response(body: &str) -> ClientResult<AnalysisResult> {
    let response: GeminiResponse = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "Failed to decode Gemini response envelope.");
        ClientError::Json(e)
    })?;

    if let Some(usage) = &response.usage_metadata {
        debug!(
            prompt = ?usage.prompt_token_count,
            candidates = ?usage.candidates_token_count,
            total = ?usage.total_token_count,
            "Gemini token usage."
        );
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::InvalidResponse("No candidates in response".to_string()))?;

    let reply = candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| {
            ClientError::InvalidResponse(format!(
                "No text in candidate (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ))
        })?;

    parse_result_text(&reply)
}

/// Parses the model's JSON reply, tolerating a surrounding Markdown code fence.
fn parse_result_text(reply: &str) -> ClientResult<AnalysisResult> {
    let json = match RE_CODE_FENCE.captures(reply) {
        Some(caps) => caps.get(1).map_or(reply, |m| m.as_str()),
        None => reply,
    };
    serde_json::from_str::<AnalysisResult>(json.trim()).map_err(|e| {
        error!(error = %e, "Gemini reply did not match the analysis schema.");
        ClientError::InvalidResponse(format!("Malformed analysis result: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use url::Url;

    fn test_settings() -> Settings {
        Settings {
            api_key: "test-key".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_base: Url::parse("https://generativelanguage.googleapis.com/v1beta/models").unwrap(),
            timeout: Duration::from_secs(5),
            temperature: 0.2,
        }
    }

    fn envelope(reply: &str) -> String {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": reply }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 40, "totalTokenCount": 160 }
        })
        .to_string()
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let mut settings = test_settings();
        settings.api_key.clear();
        assert!(matches!(GeminiClient::new(settings), Err(ClientError::MissingApiKey)));
    }

    #[test]
    fn endpoint_targets_generate_content() {
        let client = GeminiClient::new(test_settings()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn request_carries_text_and_json_schema() {
        let client = GeminiClient::new(test_settings()).unwrap();
        let body = serde_json::to_value(client.build_request("A short abstract about tides.")).unwrap();

        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("A short abstract about tides."));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["score", "similarityPercentage", "analysis", "flaggedSections"])
        );
    }

    #[test]
    fn parses_result_from_candidate_text() {
        let reply = r#"{"score": 64, "similarityPercentage": 30, "analysis": "Some overlap.",
            "flaggedSections": [{"text": "The tide rises twice daily.", "reason": "Common textbook phrasing"}]}"#;
        let result = parse_generate_response(&envelope(reply)).unwrap();
        assert_eq!(result.score, 64);
        assert_eq!(result.similarity_percentage, 30);
        assert_eq!(result.flagged_sections.len(), 1);
        assert_eq!(result.flagged_sections[0].reason, "Common textbook phrasing");
    }

    #[test]
    fn strips_markdown_fence() {
        let reply = "```json\n{\"score\": 90, \"similarityPercentage\": 5, \"analysis\": \"Original.\", \"flaggedSections\": []}\n```";
        let result = parse_generate_response(&envelope(reply)).unwrap();
        assert_eq!(result.score, 90);
    }

    #[test]
    fn missing_candidates_is_invalid() {
        let err = parse_generate_response(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn blocked_candidate_without_parts_is_invalid() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        match parse_generate_response(body) {
            Err(ClientError::InvalidResponse(msg)) => assert!(msg.contains("SAFETY")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn non_json_envelope_is_a_json_error() {
        assert!(matches!(parse_generate_response("<html>"), Err(ClientError::Json(_))));
    }

    #[test]
    fn reply_not_matching_schema_is_invalid() {
        let err = parse_generate_response(&envelope(r#"{"verdict": "fine"}"#)).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
