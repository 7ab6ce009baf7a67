//! Application use cases. Orchestrate domain logic via ports.

pub mod profile_lookup;
pub mod search_service;
pub mod vibe_analyzer;

pub use profile_lookup::ProfileLookup;
pub use search_service::{SearchReport, SearchService};
pub use vibe_analyzer::VibeAnalyzer;

#[cfg(test)]
pub(crate) mod testing {
    use crate::domain::{DomainError, Profile};
    use crate::ports::{GenerateRequest, GenerateResponse, GenerativePort, GroundingMetadata};
    use std::sync::Mutex;

    /// GenerativePort that returns a fixed outcome and records every request.
    pub struct ScriptedAi {
        outcome: Result<GenerateResponse, String>,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    impl ScriptedAi {
        pub fn reply(text: &str) -> Self {
            Self::with_outcome(Ok(GenerateResponse {
                text: text.to_string(),
                grounding: None,
            }))
        }

        pub fn reply_grounded(text: &str, grounding: GroundingMetadata) -> Self {
            Self::with_outcome(Ok(GenerateResponse {
                text: text.to_string(),
                grounding: Some(grounding),
            }))
        }

        pub fn fail(message: &str) -> Self {
            Self::with_outcome(Err(message.to_string()))
        }

        fn with_outcome(outcome: Result<GenerateResponse, String>) -> Self {
            Self {
                outcome,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<GenerateRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl GenerativePort for ScriptedAi {
        async fn generate(
            &self,
            request: GenerateRequest,
        ) -> Result<GenerateResponse, DomainError> {
            self.requests.lock().unwrap().push(request);
            self.outcome.clone().map_err(DomainError::Ai)
        }
    }

    pub fn sample_profile() -> Profile {
        Profile {
            fid: 5,
            username: "danromero".into(),
            display_name: "Dan".into(),
            pfp_url: "https://picsum.photos/seed/dan/100/100".into(),
            bio: Some("Vibe lord.".into()),
            follower_count: Some(25_000),
            following_count: Some(800),
        }
    }
}
