//! Gemini adapter for the generative port.
//!
//! Talks to the `models/{model}:generateContent` REST endpoint. Supports
//! schema-constrained JSON output and Google Search grounding.

use crate::domain::{DomainError, GroundingSource};
use crate::ports::{
    GenerateRequest, GenerateResponse, GenerativePort, GroundingMetadata, OutputShape, Tool,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Gemini REST adapter.
///
/// The API key is sent as-is; an empty key is not rejected here and surfaces
/// as an authentication error from the service.
pub struct GeminiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://generativelanguage.googleapis.com/v1beta")
    /// * `api_key` - API key (may be empty)
    /// * `timeout` - Optional per-request timeout
    pub fn new(
        base_url: String,
        api_key: String,
        timeout: Option<Duration>,
    ) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    fn build_body(request: &GenerateRequest) -> GeminiRequest {
        let generation_config = match &request.output {
            OutputShape::Text => None,
            OutputShape::Json(schema) => Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.clone(),
            }),
        };
        let tools = request
            .tools
            .iter()
            .map(|tool| match tool {
                Tool::GoogleSearch => GeminiTool {
                    google_search: serde_json::json!({}),
                },
            })
            .collect();

        GeminiRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config,
            tools,
        }
    }
}

/// generateContent request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<GeminiTool>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiTool {
    google_search: serde_json::Value,
}

/// generateContent response body.
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<RawGroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<serde_json::Value>,
}

#[async_trait::async_trait]
impl GenerativePort for GeminiAdapter {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, DomainError> {
        info!(
            model = %request.model,
            prompt_len = request.prompt.len(),
            json = matches!(request.output, OutputShape::Json(_)),
            tools = request.tools.len(),
            "sending generateContent request"
        );

        let body = Self::build_body(&request);
        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Ai(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let head: String = text.chars().take(200).collect();
            warn!(status = %status, body = %head, "Gemini API returned error");
            return Err(DomainError::Ai(format!("API error {}: {}", status, head)));
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Ai(format!("Failed to parse API response: {}", e)))?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Ai("No candidates returned".to_string()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        let grounding = candidate.grounding_metadata.map(|m| GroundingMetadata {
            chunks: m
                .grounding_chunks
                .into_iter()
                .map(GroundingSource)
                .collect(),
        });

        debug!(
            text_len = text.len(),
            sources = grounding.as_ref().map_or(0, |g| g.chunks.len()),
            "received Gemini response"
        );

        Ok(GenerateResponse { text, grounding })
    }
}
