//! Implements FollowGraphPort with a fixed set of accounts.
//!
//! There is no Farcaster hub/indexer integration yet: every username gets the
//! same non-followers and counts, after a simulated lookup delay.

use crate::domain::{DomainError, FollowStats, Profile};
use crate::ports::FollowGraphPort;
use std::time::Duration;
use tracing::info;

/// Static follow graph.
pub struct FixtureFollowGraph {
    delay: Duration,
    profiles: Vec<Profile>,
    stats: FollowStats,
}

impl FixtureFollowGraph {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            profiles: default_profiles(),
            stats: FollowStats {
                following: 842,
                followers: 710,
                non_followers: 132,
            },
        }
    }

    /// Fixture with custom contents (tests, demos).
    pub fn with_profiles(delay_ms: u64, profiles: Vec<Profile>, stats: FollowStats) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            profiles,
            stats,
        }
    }
}

fn profile(
    fid: u64,
    username: &str,
    display_name: &str,
    seed: &str,
    bio: &str,
    followers: u64,
    following: u64,
) -> Profile {
    Profile {
        fid,
        username: username.to_string(),
        display_name: display_name.to_string(),
        pfp_url: format!("https://picsum.photos/seed/{}/100/100", seed),
        bio: Some(bio.to_string()),
        follower_count: Some(followers),
        following_count: Some(following),
    }
}

fn default_profiles() -> Vec<Profile> {
    vec![
        profile(1, "vitalik.eth", "Vitalik", "vitalik", "Ethereum things.", 500_000, 100),
        profile(2, "derek", "Derek", "derek", "Building Farcaster.", 10_000, 500),
        profile(
            3,
            "spammer123",
            "Botty",
            "bot",
            "Follow for crypto gains! 🚀🚀🚀",
            2,
            5_000,
        ),
        profile(4, "inactive_user", "Lazy Ghost", "ghost", "", 10, 10),
        profile(5, "danromero", "Dan", "dan", "Vibe lord.", 25_000, 800),
    ]
}

#[async_trait::async_trait]
impl FollowGraphPort for FixtureFollowGraph {
    async fn follow_stats(&self, _username: &str) -> Result<FollowStats, DomainError> {
        Ok(self.stats)
    }

    async fn non_followers(&self, username: &str) -> Result<Vec<Profile>, DomainError> {
        info!(
            username,
            delay_ms = self.delay.as_millis() as u64,
            "loading fixture non-followers"
        );
        tokio::time::sleep(self.delay).await;
        Ok(self.profiles.clone())
    }
}
