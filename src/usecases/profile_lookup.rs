//! Profile lookup. Search-grounded summary of a Farcaster username.
//!
//! Unlike the vibe analyzer, errors propagate to the caller.

use crate::domain::{DomainError, GroundingResult};
use crate::ports::{GenerateRequest, GenerativePort, Tool};
use std::sync::Arc;
use tracing::info;

pub struct ProfileLookup {
    ai: Arc<dyn GenerativePort>,
    model: String,
}

impl ProfileLookup {
    pub fn new(ai: Arc<dyn GenerativePort>, model: String) -> Self {
        Self { ai, model }
    }

    /// Ask the model (with Google Search enabled) what it can find about `username`.
    ///
    /// Blank usernames are rejected before any request is made. Missing
    /// grounding metadata yields an empty `sources` list.
    pub async fn lookup(&self, username: &str) -> Result<GroundingResult, DomainError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::InvalidInput("username must not be empty".into()));
        }

        let request = GenerateRequest::text(self.model.clone(), Self::prompt(username))
            .with_tool(Tool::GoogleSearch);
        let reply = self.ai.generate(request).await?;

        let sources = reply.grounding.map(|g| g.chunks).unwrap_or_default();
        info!(
            username,
            text_len = reply.text.len(),
            sources = sources.len(),
            "profile lookup complete"
        );

        Ok(GroundingResult {
            text: reply.text,
            sources,
        })
    }

    fn prompt(username: &str) -> String {
        format!(
            "Find public Farcaster (Warpcast) profile information for username \"{}\".\n\
             Specifically, I need to know roughly who they follow and who follows them back to identify non-followers.\n\
             If you can't find specific lists, return general profile stats.",
            username
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GroundingSource;
    use crate::ports::{GroundingMetadata, OutputShape};
    use crate::usecases::testing::ScriptedAi;

    fn lookup(ai: Arc<ScriptedAi>) -> ProfileLookup {
        ProfileLookup::new(ai, "gemini-3-pro-preview".into())
    }

    #[tokio::test]
    async fn test_missing_grounding_gives_empty_sources() {
        let ai = Arc::new(ScriptedAi::reply("dwr.eth co-founded Farcaster."));
        let result = lookup(ai).lookup("dwr.eth").await.unwrap();

        assert_eq!(result.text, "dwr.eth co-founded Farcaster.");
        assert!(result.sources.is_empty());
    }

    #[tokio::test]
    async fn test_sources_are_passed_through() {
        let chunk = serde_json::json!({ "web": { "uri": "https://a", "title": "a" }, "extra": 1 });
        let ai = Arc::new(ScriptedAi::reply_grounded(
            "summary",
            GroundingMetadata {
                chunks: vec![GroundingSource(chunk.clone())],
            },
        ));
        let result = lookup(ai).lookup("dwr.eth").await.unwrap();

        assert_eq!(result.sources, vec![GroundingSource(chunk)]);
    }

    #[tokio::test]
    async fn test_error_propagates() {
        let ai = Arc::new(ScriptedAi::fail("API error 403 Forbidden"));
        let err = lookup(ai).lookup("dwr.eth").await.unwrap_err();

        assert!(matches!(err, DomainError::Ai(msg) if msg.contains("403")));
    }

    #[tokio::test]
    async fn test_blank_username_rejected_without_call() {
        let ai = Arc::new(ScriptedAi::reply("unused"));
        let service = lookup(Arc::clone(&ai));

        for name in ["", "   ", "\t\n"] {
            let err = service.lookup(name).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)));
        }
        assert!(ai.requests().is_empty());
    }

    #[tokio::test]
    async fn test_request_uses_search_tool() {
        let ai = Arc::new(ScriptedAi::reply("ok"));
        lookup(Arc::clone(&ai)).lookup("  dwr.eth ").await.unwrap();

        let requests = ai.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gemini-3-pro-preview");
        assert_eq!(requests[0].tools, vec![Tool::GoogleSearch]);
        assert_eq!(requests[0].output, OutputShape::Text);
        assert!(requests[0].prompt.contains("\"dwr.eth\""));
    }
}
