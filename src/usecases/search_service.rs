//! Search service. Username → grounded summary + follow stats + non-followers.

use crate::domain::{DomainError, FollowStats, GroundingResult, Profile, excerpt};
use crate::ports::FollowGraphPort;
use crate::usecases::ProfileLookup;
use std::sync::Arc;
use tracing::info;

/// Everything the results screen shows for one search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub username: String,
    pub summary: GroundingResult,
    pub stats: FollowStats,
    pub non_followers: Vec<Profile>,
}

impl SearchReport {
    /// First `max_chars` characters of the grounded summary.
    pub fn summary_excerpt(&self, max_chars: usize) -> String {
        excerpt(&self.summary.text, max_chars)
    }
}

pub struct SearchService {
    lookup: Arc<ProfileLookup>,
    graph: Arc<dyn FollowGraphPort>,
}

impl SearchService {
    pub fn new(lookup: Arc<ProfileLookup>, graph: Arc<dyn FollowGraphPort>) -> Self {
        Self { lookup, graph }
    }

    /// Run one search. Lookup errors abort the search before the follow graph is queried.
    pub async fn search(&self, username: &str) -> Result<SearchReport, DomainError> {
        let summary = self.lookup.lookup(username).await?;
        let username = username.trim().to_string();

        let stats = self.graph.follow_stats(&username).await?;
        let non_followers = self.graph.non_followers(&username).await?;

        info!(
            username = %username,
            non_followers = non_followers.len(),
            "search complete"
        );

        Ok(SearchReport {
            username,
            summary,
            stats,
            non_followers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::follow_graph::FixtureFollowGraph;
    use crate::usecases::testing::{ScriptedAi, sample_profile};

    fn service(ai: Arc<ScriptedAi>) -> SearchService {
        let lookup = Arc::new(ProfileLookup::new(ai, "gemini-3-pro-preview".into()));
        let graph = Arc::new(FixtureFollowGraph::with_profiles(
            0,
            vec![sample_profile()],
            FollowStats {
                following: 3,
                followers: 2,
                non_followers: 1,
            },
        ));
        SearchService::new(lookup, graph)
    }

    #[tokio::test]
    async fn test_search_combines_lookup_and_graph() {
        let ai = Arc::new(ScriptedAi::reply("summary"));
        let report = service(ai).search(" dwr.eth ").await.unwrap();

        assert_eq!(report.username, "dwr.eth");
        assert_eq!(report.summary.text, "summary");
        assert_eq!(report.stats.non_followers, 1);
        assert_eq!(report.non_followers, vec![sample_profile()]);
    }

    #[tokio::test]
    async fn test_lookup_failure_aborts_search() {
        let ai = Arc::new(ScriptedAi::fail("boom"));
        assert!(service(ai).search("dwr.eth").await.is_err());
    }

    #[tokio::test]
    async fn test_summary_excerpt() {
        let ai = Arc::new(ScriptedAi::reply(&"a".repeat(500)));
        let report = service(ai).search("dwr.eth").await.unwrap();

        let cut = report.summary_excerpt(300);
        assert_eq!(cut, format!("{}...", "a".repeat(300)));
    }
}
