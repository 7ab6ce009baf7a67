//! Vibe analyzer. Classifies a profile via schema-constrained generation.
//!
//! Never fails: any error on the way (transport, status, parse) is logged and
//! replaced with the benign fallback classification.

use crate::domain::{DomainError, Locale, Profile, Recommendation, Vibe, VibeClassification};
use crate::ports::{GenerateRequest, GenerativePort};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

pub struct VibeAnalyzer {
    ai: Arc<dyn GenerativePort>,
    model: String,
    locale: Locale,
}

impl VibeAnalyzer {
    /// # Arguments
    /// * `ai` - Generative port implementation (Gemini, Mock, etc.)
    /// * `model` - Model used for classification
    /// * `locale` - Language requested for `reason` and used for the fallback message
    pub fn new(ai: Arc<dyn GenerativePort>, model: String, locale: Locale) -> Self {
        Self { ai, model, locale }
    }

    /// Classify a profile. Returns the fallback classification on any failure.
    pub async fn analyze(&self, profile: &Profile) -> VibeClassification {
        match self.try_analyze(profile).await {
            Ok(result) => {
                info!(
                    username = %profile.username,
                    vibe = %result.vibe,
                    recommendation = %result.recommendation,
                    "vibe check complete"
                );
                result
            }
            Err(e) => {
                warn!(
                    username = %profile.username,
                    error = %e,
                    "vibe check failed, using fallback"
                );
                VibeClassification::fallback(self.locale)
            }
        }
    }

    /// Classify several profiles concurrently. Results keep the input order.
    pub async fn analyze_many(
        self: &Arc<Self>,
        profiles: Vec<Profile>,
    ) -> Vec<(Profile, VibeClassification)> {
        let mut set = JoinSet::new();
        for (idx, profile) in profiles.iter().cloned().enumerate() {
            let analyzer = Arc::clone(self);
            set.spawn(async move { (idx, analyzer.analyze(&profile).await) });
        }

        let mut results: Vec<Option<VibeClassification>> = vec![None; profiles.len()];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((idx, result)) => results[idx] = Some(result),
                Err(e) => warn!(error = %e, "vibe check task aborted"),
            }
        }

        profiles
            .into_iter()
            .zip(results)
            .map(|(p, r)| (p, r.unwrap_or_else(|| VibeClassification::fallback(self.locale))))
            .collect()
    }

    async fn try_analyze(&self, profile: &Profile) -> Result<VibeClassification, DomainError> {
        let request = GenerateRequest::json(
            self.model.clone(),
            Self::prompt(profile),
            self.response_schema(),
        );
        let reply = self.ai.generate(request).await?;
        let clean = Self::sanitize_json(&reply.text);
        serde_json::from_str(clean).map_err(|e| {
            let head: String = clean.chars().take(200).collect();
            warn!(error = %e, json = %head, "JSON parse failed");
            DomainError::Ai(format!("Failed to parse classification: {}", e))
        })
    }

    fn prompt(profile: &Profile) -> String {
        fn count(n: Option<u64>) -> String {
            n.map_or_else(|| "unknown".to_string(), |n| n.to_string())
        }

        format!(
            "Analyze this Farcaster user profile and determine if they are worth following despite not following back.\n\
             Username: {}\n\
             Display Name: {}\n\
             Bio: {}\n\
             Followers: {}\n\
             Following: {}",
            profile.username,
            profile.display_name,
            profile.bio.as_deref().unwrap_or("(no bio)"),
            count(profile.follower_count),
            count(profile.following_count),
        )
    }

    /// Gemini response schema: exactly `vibe`, `reason`, `recommendation`.
    fn response_schema(&self) -> serde_json::Value {
        let vibes: Vec<&str> = Vibe::ALL.iter().map(|v| v.as_str()).collect();
        let recommendations: Vec<&str> =
            Recommendation::ALL.iter().map(|r| r.as_str()).collect();
        let reason = format!("{} explanation for the vibe", self.locale.language_name());

        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "vibe": {
                    "type": "STRING",
                    "format": "enum",
                    "enum": vibes,
                    "description": format!("One of: {}", vibes.join(", ")),
                },
                "reason": {
                    "type": "STRING",
                    "description": reason,
                },
                "recommendation": {
                    "type": "STRING",
                    "format": "enum",
                    "enum": recommendations,
                    "description": format!("One of: {}", recommendations.join(", ")),
                },
            },
            "required": ["vibe", "reason", "recommendation"],
        })
    }

    /// Models occasionally wrap JSON in a markdown fence or prose even in JSON mode.
    fn sanitize_json(raw: &str) -> &str {
        let trimmed = raw.trim();

        if let Some(rest) = trimmed.strip_prefix("```") {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            return rest.strip_suffix("```").unwrap_or(rest).trim();
        }

        if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
            if start < end {
                return &trimmed[start..=end];
            }
        }

        trimmed
    }
}
