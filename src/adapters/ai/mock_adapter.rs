//! Mock AI adapter for running without API calls.
//!
//! Returns deterministic replies for development and testing purposes.

use crate::domain::{DomainError, GroundingSource};
use crate::ports::{
    GenerateRequest, GenerateResponse, GenerativePort, GroundingMetadata, OutputShape,
};
use std::time::Duration;
use tracing::info;

/// Mock AI adapter.
///
/// JSON requests get a vibe classification guessed from the prompt's
/// follower/following lines; text requests get a canned grounded summary.
/// Simulates network latency with configurable delay.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    /// Value of a `Label: value` line in the prompt.
    fn field<'a>(prompt: &'a str, label: &str) -> Option<&'a str> {
        prompt.lines().find_map(|line| {
            line.trim()
                .strip_prefix(label)
                .and_then(|rest| rest.strip_prefix(':'))
                .map(str::trim)
        })
    }

    fn count(prompt: &str, label: &str) -> Option<u64> {
        Self::field(prompt, label).and_then(|v| v.parse().ok())
    }

    fn classify(prompt: &str) -> serde_json::Value {
        let followers = Self::count(prompt, "Followers").unwrap_or(0);
        let following = Self::count(prompt, "Following").unwrap_or(0);
        let bio = Self::field(prompt, "Bio").unwrap_or_default();

        let (vibe, recommendation, reason) = if following > followers.saturating_mul(100) {
            ("spam", "unfollow", "[MOCK] Follows far more accounts than follow back.")
        } else if followers >= 10_000 {
            ("high-value", "keep", "[MOCK] Large audience, worth following anyway.")
        } else if bio.is_empty() || bio == "(no bio)" {
            ("inactive", "watch", "[MOCK] No bio and little activity.")
        } else {
            ("cool", "keep", "[MOCK] Looks like a regular account.")
        };

        serde_json::json!({
            "vibe": vibe,
            "reason": reason,
            "recommendation": recommendation,
        })
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GenerativePort for MockAiAdapter {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, DomainError> {
        info!(
            model = %request.model,
            prompt_len = request.prompt.len(),
            "[MOCK] Simulating generateContent"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        match request.output {
            OutputShape::Json(_) => Ok(GenerateResponse {
                text: Self::classify(&request.prompt).to_string(),
                grounding: None,
            }),
            OutputShape::Text => Ok(GenerateResponse {
                text: format!(
                    "[MOCK] Search-grounded summary for a {} character request. \
                     In production, Gemini would describe the public Farcaster profile, \
                     follower counts and notable connections found on the web.",
                    request.prompt.len()
                ),
                grounding: Some(GroundingMetadata {
                    chunks: vec![GroundingSource(serde_json::json!({
                        "web": { "uri": "https://warpcast.com", "title": "warpcast.com" }
                    }))],
                }),
            }),
        }
    }
}
