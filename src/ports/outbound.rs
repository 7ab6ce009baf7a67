//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, FollowStats, GroundingSource, Profile};

/// Shape the model must produce.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputShape {
    /// Free text.
    Text,
    /// JSON constrained by the given response schema (OpenAPI subset, as Gemini expects).
    Json(serde_json::Value),
}

/// Server-side capabilities the model may use while answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Live web search; the reply carries grounding metadata.
    GoogleSearch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub output: OutputShape,
    pub tools: Vec<Tool>,
}

impl GenerateRequest {
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            output: OutputShape::Text,
            tools: Vec::new(),
        }
    }

    pub fn json(
        model: impl Into<String>,
        prompt: impl Into<String>,
        schema: serde_json::Value,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            output: OutputShape::Json(schema),
            tools: Vec::new(),
        }
    }

    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tools.push(tool);
        self
    }
}

/// Citations attached to a search-grounded reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundingMetadata {
    pub chunks: Vec<GroundingSource>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateResponse {
    pub text: String,
    pub grounding: Option<GroundingMetadata>,
}

/// Hosted LLM "generate content" capability.
#[async_trait::async_trait]
pub trait GenerativePort: Send + Sync {
    /// Single request/response call. No retries.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, DomainError>;
}

/// Source of follow relationships for a username.
#[async_trait::async_trait]
pub trait FollowGraphPort: Send + Sync {
    async fn follow_stats(&self, username: &str) -> Result<FollowStats, DomainError>;

    /// Accounts the user follows that do not follow back.
    async fn non_followers(&self, username: &str) -> Result<Vec<Profile>, DomainError>;
}
